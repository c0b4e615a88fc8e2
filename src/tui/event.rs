use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit, // Ctrl+C, quits from any screen
    Submit,
    Escape,

    // Form editing
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,
    FocusNext,
    FocusPrev,
    TogglePassword, // Ctrl+P
    ShowSignup,     // Ctrl+N
    ShowLogin,      // Ctrl+L

    // Pointer (column, row)
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    FocusLost,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            warn!("Event read failed: {}", e);
            return None;
        }
    };
    translate(event)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::TogglePassword),
                (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(TuiEvent::ShowSignup),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::ShowLogin),
                (KeyModifiers::CONTROL, _) => None,
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::FocusLost => Some(TuiEvent::FocusLost),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
