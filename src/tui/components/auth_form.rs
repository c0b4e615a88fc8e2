//! # Auth Form Component
//!
//! The sign-in and sign-up screens. Follows the persistent state + transient
//! wrapper pattern:
//! - `AuthFormState` lives in `TuiState` (one per form) and owns the fields
//! - `AuthForm` is created each frame with borrowed state and the current
//!   validation errors from `App`

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::validation::{Field, FieldErrors};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_field::{FIELD_HEIGHT, FieldView, InputField};
use crate::tui::event::TuiEvent;

const FORM_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    /// The user edited a field; its stale error can go.
    Edited(Field),
}

#[derive(Debug, Clone)]
pub struct AuthFormState {
    pub kind: FormKind,
    name: InputField,
    email: InputField,
    password: InputField,
    focus: Field,
    pub show_password: bool,
}

impl AuthFormState {
    pub fn new(kind: FormKind) -> Self {
        let focus = match kind {
            FormKind::Login => Field::Email,
            FormKind::Signup => Field::Name,
        };
        Self {
            kind,
            name: InputField::new("Full Name", "Jane Appleseed"),
            email: InputField::new("Email", "you@example.com"),
            password: InputField::new("Password", "At least 6 characters").masked(),
            focus,
            show_password: false,
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        match self.kind {
            FormKind::Login => &[Field::Email, Field::Password],
            FormKind::Signup => &[Field::Name, Field::Email, Field::Password],
        }
    }

    pub fn field(&self, field: Field) -> &InputField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut InputField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(self.fields().len() - 1);
    }

    fn move_focus(&mut self, step: usize) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + step) % fields.len()];
    }

    pub fn set_email(&mut self, email: &str) {
        self.email.set_value(email);
    }

    /// Clear every field and return focus to the first one.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    /// The submit action for the current field values.
    pub fn submit_action(&self) -> Action {
        match self.kind {
            FormKind::Login => Action::SubmitLogin {
                email: self.email.value().to_string(),
                password: self.password.value().to_string(),
            },
            FormKind::Signup => Action::SubmitSignup {
                name: self.name.value().to_string(),
                email: self.email.value().to_string(),
                password: self.password.value().to_string(),
            },
        }
    }
}

impl EventHandler for AuthFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Submit => Some(FormEvent::Submit),
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus_next();
                None
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus_prev();
                None
            }
            TuiEvent::TogglePassword => {
                self.show_password = !self.show_password;
                None
            }
            other => {
                let focus = self.focus;
                self.field_mut(focus)
                    .handle_event(other)
                    .map(|_| FormEvent::Edited(focus))
            }
        }
    }
}

/// Transient render wrapper for a form.
pub struct AuthForm<'a> {
    pub state: &'a AuthFormState,
    pub errors: &'a FieldErrors,
    pub is_loading: bool,
}

impl AuthForm<'_> {
    fn header(&self) -> Vec<Line<'static>> {
        let (title, subtitle) = match self.state.kind {
            FormKind::Login => ("Welcome Back", "Sign in to continue"),
            FormKind::Signup => ("Create Account", "Sign up to get started"),
        };
        vec![
            Line::styled(
                title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Line::styled(subtitle, Style::default().fg(Color::DarkGray)),
        ]
    }

    fn footer(&self) -> Vec<Line<'static>> {
        let button = match (self.state.kind, self.is_loading) {
            (FormKind::Login, false) => "[ Sign In ]",
            (FormKind::Login, true) => "[ Signing In... ]",
            (FormKind::Signup, false) => "[ Create Account ]",
            (FormKind::Signup, true) => "[ Creating Account... ]",
        };
        let switch = match self.state.kind {
            FormKind::Login => "Don't have an account? Ctrl+N to sign up",
            FormKind::Signup => "Already have an account? Ctrl+L to sign in",
        };
        let reveal = if self.state.show_password {
            "Ctrl+P hide password"
        } else {
            "Ctrl+P show password"
        };
        let key = Style::default().fg(Color::DarkGray);

        let mut lines = vec![
            Line::styled(
                button,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(switch, key),
            Line::from(vec![
                Span::styled("Tab next field  ", key),
                Span::styled(reveal, key),
            ]),
        ];
        if self.state.kind == FormKind::Login {
            lines.push(Line::styled(
                "Demo: demo@example.com or test@example.com",
                key.add_modifier(Modifier::ITALIC),
            ));
        }
        lines
    }
}

impl Component for AuthForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = self.header();
        let footer = self.footer();
        let fields = self.state.fields();

        let mut constraints = vec![
            Constraint::Length(header.len() as u16),
            Constraint::Length(1),
        ];
        constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Length(footer.len() as u16));

        let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let rows = Layout::vertical(constraints)
            .flex(Flex::Center)
            .split(column);

        frame.render_widget(
            Paragraph::new(header).alignment(Alignment::Center),
            rows[0],
        );

        for (i, field) in fields.iter().enumerate() {
            FieldView {
                field: self.state.field(*field),
                focused: *field == self.state.focus() && !self.is_loading,
                error: self.errors.get(field).map(String::as_str),
                reveal: self.state.show_password,
            }
            .render(frame, rows[i + 2]);
        }

        frame.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            rows[fields.len() + 2],
        );
    }
}
