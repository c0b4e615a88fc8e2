//! # Application State
//!
//! Core business state for the shell. This module contains domain logic only -
//! no TUI-specific types. Presentation state (form buffers, the drag tracker,
//! the swipe navigator) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── auth: Arc<dyn AuthProvider>   // mock credential store
//! ├── screen: Screen                // splash | login | signup | dashboard(tab)
//! ├── user: Option<User>            // signed-in account
//! ├── signed_in_at: Option<DateTime>
//! ├── is_loading: bool              // waiting for an auth task
//! ├── form_errors: FieldErrors      // per-field validation messages
//! ├── alert: Option<Alert>          // modal message
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::action::{Action, update};
use crate::core::auth::{AuthProvider, User};
use crate::core::navigator::TabHost;
use crate::core::tab::Tab;
use crate::core::user_cache::CachedUser;
use crate::core::validation::FieldErrors;

/// How long the sign-in success alert stays up on its own.
pub const SUCCESS_ALERT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Signup,
    Dashboard(Tab),
}

impl Screen {
    pub fn tab(self) -> Option<Tab> {
        match self {
            Screen::Dashboard(tab) => Some(tab),
            _ => None,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Screen::Login | Screen::Signup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A modal message. Dismissing it may move to another screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub button: String,
    /// Screen to show once the alert is dismissed.
    pub then: Option<Screen>,
    pub auto_dismiss: Option<Duration>,
}

impl Alert {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.into(),
            message: message.into(),
            button: "Continue".to_string(),
            then: None,
            auto_dismiss: None,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title: title.into(),
            message: message.into(),
            button: "Try Again".to_string(),
            then: None,
            auto_dismiss: None,
        }
    }

    pub fn then(mut self, screen: Screen) -> Self {
        self.then = Some(screen);
        self
    }

    pub fn button(mut self, label: impl Into<String>) -> Self {
        self.button = label.into();
        self
    }

    pub fn auto_dismiss(mut self, after: Duration) -> Self {
        self.auto_dismiss = Some(after);
        self
    }
}

pub struct App {
    pub auth: Arc<dyn AuthProvider>,
    pub screen: Screen,
    pub user: Option<User>,
    pub signed_in_at: Option<DateTime<Utc>>,
    pub is_loading: bool,
    pub form_errors: FieldErrors,
    pub alert: Option<Alert>,
    pub status_message: String,
}

impl App {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            auth,
            screen: Screen::Splash,
            user: None,
            signed_in_at: None,
            is_loading: false,
            form_errors: FieldErrors::new(),
            alert: None,
            status_message: String::from("Checking authentication..."),
        }
    }

    /// Start with a user restored from the local cache.
    pub fn restore(&mut self, cached: CachedUser) {
        self.user = Some(cached.user);
        self.signed_in_at = Some(cached.cached_at);
        self.status_message = String::from("Welcome back!");
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl TabHost for App {
    fn current_tab(&self) -> Tab {
        self.screen.tab().unwrap_or_default()
    }

    fn request_navigation(&mut self, tab: Tab) {
        update(self, Action::SelectTab(tab));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Splash);
        assert!(!app.is_loading);
        assert!(!app.is_authenticated());
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_restore_cached_user() {
        let mut app = test_app();
        let cached = CachedUser {
            user: User::new("1", "Demo User", "demo@example.com"),
            cached_at: Utc::now(),
        };
        app.restore(cached.clone());
        assert_eq!(app.user, Some(cached.user));
        assert_eq!(app.signed_in_at, Some(cached.cached_at));
    }

    #[test]
    fn test_app_as_tab_host() {
        let mut app = test_app();
        app.user = Some(User::new("1", "Demo User", "demo@example.com"));
        app.screen = Screen::Dashboard(Tab::About);

        assert_eq!(app.current_tab(), Tab::About);
        app.request_navigation(Tab::Profile);
        assert_eq!(app.screen, Screen::Dashboard(Tab::Profile));
    }

    #[test]
    fn test_host_ignores_navigation_outside_dashboard() {
        let mut app = test_app();
        app.screen = Screen::Login;

        assert_eq!(app.current_tab(), Tab::Home);
        app.request_navigation(Tab::Shop);
        assert_eq!(app.screen, Screen::Login);
    }
}
