//! # Alert Overlay
//!
//! Modal message box drawn over the current screen. Enter or Esc dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::state::{Alert, AlertKind};
use crate::tui::component::Component;

pub struct AlertView<'a> {
    pub alert: &'a Alert,
}

impl Component for AlertView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let color = match self.alert.kind {
            AlertKind::Success => Color::Green,
            AlertKind::Error => Color::Red,
        };
        let help_text = format!(" Enter {} ", self.alert.button);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Line::styled(
                format!(" {} ", self.alert.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::new(2, 2, 1, 1));

        let message = Paragraph::new(self.alert.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(message, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
