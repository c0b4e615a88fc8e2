//! # Tab Content
//!
//! Body of each dashboard tab. Stateless: everything it shows comes in as props.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::auth::User;
use crate::core::tab::Tab;
use crate::tui::component::Component;

const PRODUCTS: [(&str, &str); 4] = [
    ("Wireless Headphones", "$129.00"),
    ("Smart Watch", "$249.00"),
    ("Portable Charger", "$39.00"),
    ("Bluetooth Speaker", "$89.00"),
];

pub struct TabContent<'a> {
    pub tab: Tab,
    pub user: Option<&'a User>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl TabContent<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let name = self.user.map(|u| u.name.clone()).unwrap_or_default();

        match self.tab {
            Tab::Home => vec![
                Line::styled(format!("Welcome, {name}!"), heading),
                Line::default(),
                Line::raw("Swipe left or right anywhere on this screen to move between tabs."),
                Line::raw("The arrow keys and 1-4 work too."),
                Line::default(),
                Line::styled("← → switch tabs   x sign out   q quit", dim),
            ],
            Tab::Shop => {
                let mut lines = vec![Line::styled("Featured Products", heading), Line::default()];
                lines.extend(PRODUCTS.iter().map(|(item, price)| {
                    Line::from(vec![
                        Span::raw(format!("{item:<24}")),
                        Span::styled(*price, Style::default().fg(Color::Green)),
                    ])
                }));
                lines
            }
            Tab::About => vec![
                Line::styled("About", heading),
                Line::default(),
                Line::raw("A tabbed app shell with debounced swipe navigation."),
                Line::styled(format!("Version {}", env!("CARGO_PKG_VERSION")), dim),
            ],
            Tab::Profile => {
                let Some(user) = self.user else {
                    return vec![Line::styled("Not signed in", dim)];
                };
                let since = self
                    .signed_in_at
                    .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                vec![
                    Line::styled(user.name.clone(), heading),
                    Line::raw(user.email.clone()),
                    Line::default(),
                    Line::from(vec![Span::styled("User ID    ", dim), Span::raw(user.id.clone())]),
                    Line::from(vec![Span::styled("Signed in  ", dim), Span::raw(since)]),
                    Line::default(),
                    Line::styled("Press x to sign out", Style::default().fg(Color::Red)),
                ]
            }
        }
    }
}

impl Component for TabContent<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.tab.title()))
            .padding(Padding::new(2, 2, 1, 1));

        let body = Paragraph::new(self.lines())
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(body, area);
    }
}
