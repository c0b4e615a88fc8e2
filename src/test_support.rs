//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::auth::MockAuthProvider;
use crate::core::navigator::TabHost;
use crate::core::state::App;
use crate::core::tab::Tab;

/// A tab host that records every navigation request it receives.
pub struct RecordingHost {
    pub current: Tab,
    pub requests: Vec<Tab>,
}

impl RecordingHost {
    pub fn new(current: Tab) -> Self {
        Self {
            current,
            requests: Vec::new(),
        }
    }
}

impl TabHost for RecordingHost {
    fn current_tab(&self) -> Tab {
        self.current
    }

    fn request_navigation(&mut self, tab: Tab) {
        self.requests.push(tab);
        self.current = tab;
    }
}

/// Creates a test App backed by a zero-latency mock auth provider.
pub fn test_app() -> App {
    App::new(Arc::new(MockAuthProvider::default()))
}
