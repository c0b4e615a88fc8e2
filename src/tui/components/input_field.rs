//! # InputField Component
//!
//! Single-line text field used by the sign-in and sign-up forms.
//!
//! The buffer and cursor are internal state. Focus, the validation error and
//! password reveal are props supplied by the form at render time through
//! `FieldView`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows a field occupies: bordered box plus an error line.
pub const FIELD_HEIGHT: u16 = 4;

const MASK: char = '•';

/// Emitted when the field's content changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Changed;

#[derive(Debug, Clone)]
pub struct InputField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub masked: bool,
    value: String,
    /// Byte offset into `value`.
    cursor: usize,
}

impl InputField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            masked: false,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Text as it appears on screen, plus the cursor's display column.
    fn display(&self, reveal: bool) -> (String, usize) {
        if self.masked && !reveal {
            let count = self.value.chars().count();
            let before = self.value[..self.cursor].chars().count();
            (MASK.to_string().repeat(count), before)
        } else {
            let column = self.value[..self.cursor]
                .chars()
                .map(|c| c.width().unwrap_or(0))
                .sum();
            (self.value.clone(), column)
        }
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Drop leading characters until the cursor column fits in `width`.
/// Returns the visible text and the cursor column within it.
fn visible_window(text: &str, cursor_column: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let overflow = (cursor_column + 1).saturating_sub(width);
    let mut skipped = 0;
    let mut chars = text.chars().peekable();
    while skipped < overflow {
        match chars.next() {
            Some(c) => skipped += c.width().unwrap_or(0),
            None => break,
        }
    }
    (chars.collect(), cursor_column.saturating_sub(skipped))
}

impl EventHandler for InputField {
    type Event = Changed;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Changed> {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(Changed)
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                self.value.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(Changed)
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.value, self.cursor);
                self.value.drain(prev..self.cursor);
                self.cursor = prev;
                Some(Changed)
            }
            TuiEvent::Delete if self.cursor < self.value.len() => {
                let next = next_char_boundary(&self.value, self.cursor);
                self.value.drain(self.cursor..next);
                Some(Changed)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                None
            }
            TuiEvent::CursorRight if self.cursor < self.value.len() => {
                self.cursor = next_char_boundary(&self.value, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.value.len();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper carrying the field's props.
pub struct FieldView<'a> {
    pub field: &'a InputField,
    pub focused: bool,
    pub error: Option<&'a str>,
    pub reveal: bool,
}

impl Component for FieldView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [box_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let border_color = match (self.error.is_some(), self.focused) {
            (true, _) => Color::Red,
            (false, true) => Color::Cyan,
            (false, false) => Color::DarkGray,
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.field.label));

        let inner_width = box_area.width.saturating_sub(2) as usize;
        let (text, column) = self.field.display(self.reveal);
        let (visible, cursor_x) = visible_window(&text, column, inner_width);

        let content = if self.field.value.is_empty() {
            Paragraph::new(self.field.placeholder)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(visible)
        };
        frame.render_widget(content.block(block), box_area);

        if let Some(error) = self.error {
            frame.render_widget(
                Line::styled(format!(" {error}"), Style::default().fg(Color::Red)),
                error_area,
            );
        }

        if self.focused && inner_width > 0 {
            frame.set_cursor_position((box_area.x + 1 + cursor_x as u16, box_area.y + 1));
        }
    }
}
