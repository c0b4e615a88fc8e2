//! # TitleBar Component
//!
//! Top status bar showing where the user is and any transient status.
//!
//! The title text changes based on state:
//!
//! 1. **Signed in with status**: `"Tabshell | Shop | Demo User | Signing In..."`
//! 2. **Signed in**: `"Tabshell | Shop | Demo User"`
//! 3. **Signed out**: `"Tabshell | Sign In"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar. All fields are props.
pub struct TitleBar {
    /// Screen or tab title (e.g. "Sign In", "Shop")
    pub location: String,
    /// Signed-in user's display name
    pub user_name: Option<String>,
    /// Status message (e.g. "Signing In...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(location: String, user_name: Option<String>, status_message: String) -> Self {
        Self {
            location,
            user_name,
            status_message,
        }
    }

    fn text(&self) -> String {
        let mut parts = vec!["Tabshell", self.location.as_str()];
        if let Some(name) = &self.user_name {
            parts.push(name);
        }
        if !self.status_message.is_empty() {
            parts.push(&self.status_message);
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::Cyan)),
            area,
        );
    }
}
