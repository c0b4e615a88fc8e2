//! # Splash Component
//!
//! Shown while the app checks for a remembered user.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Splash {
    frame_index: usize,
}

impl Splash {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for Splash {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::styled(
                "Tabshell",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            ),
            Line::default(),
            Line::styled(
                format!("{} Loading...", SPINNER[self.frame_index % SPINNER.len()]),
                Style::default().fg(Color::Yellow),
            ),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_splash_renders_name_and_spinner() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| Splash::new(13).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Tabshell"));
        assert!(text.contains("⠸ Loading..."));
    }
}
