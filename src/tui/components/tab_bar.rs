//! # TabBar Component
//!
//! Bottom navigation bar for the dashboard. Each tab gets an equal-width
//! segment showing its number key and title. Clicking a segment selects it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::tab::Tab;
use crate::tui::component::Component;

pub const TAB_BAR_HEIGHT: u16 = 3;

pub struct TabBar {
    pub active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

fn segments(area: Rect) -> [Rect; 4] {
    Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area)
}

/// Which tab, if any, sits under the given cell.
pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<Tab> {
    if row < area.y || row >= area.y + area.height {
        return None;
    }
    segments(area)
        .iter()
        .position(|segment| col >= segment.x && col < segment.x + segment.width)
        .and_then(Tab::from_index)
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (tab, segment) in Tab::ALL.iter().zip(segments(area)) {
            let selected = *tab == self.active;
            let style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let border_style = if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = Paragraph::new(format!("{} {}", tab.index() + 1, tab.title()))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::TOP).border_style(border_style));
            frame.render_widget(label, segment);
        }
    }
}
