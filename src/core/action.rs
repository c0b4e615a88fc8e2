//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User presses Enter on the login form? That's `Action::SubmitLogin`.
//! The auth task answers? That's `Action::LoginCompleted(result)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the `Effect` the event loop must carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Utc;
use log::info;

use crate::core::auth::{AuthError, User};
use crate::core::state::{Alert, AlertKind, App, SUCCESS_ALERT_TIMEOUT, Screen};
use crate::core::tab::Tab;
use crate::core::validation::{Field, validate_login, validate_signup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SplashFinished,
    ShowLogin,
    ShowSignup,
    SubmitLogin { email: String, password: String },
    SubmitSignup { name: String, email: String, password: String },
    LoginCompleted(Result<User, AuthError>),
    SignupCompleted(Result<User, AuthError>),
    DismissAlert,
    ClearFieldError(Field),
    SelectTab(Tab),
    Logout,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnLogin(LoginRequest),
    SpawnSignup(SignupRequest),
    SaveUser(User),
    ClearUserCache,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SplashFinished => {
            if app.screen == Screen::Splash {
                app.screen = if app.is_authenticated() {
                    Screen::Dashboard(Tab::Home)
                } else {
                    Screen::Login
                };
                app.status_message.clear();
            }
            Effect::None
        }
        Action::ShowLogin | Action::ShowSignup => {
            if app.screen.is_form() && !app.is_loading {
                app.screen = if action == Action::ShowLogin {
                    Screen::Login
                } else {
                    Screen::Signup
                };
                app.form_errors.clear();
            }
            Effect::None
        }
        Action::SubmitLogin { email, password } => {
            if app.is_loading || app.screen != Screen::Login {
                return Effect::None;
            }
            let errors = validate_login(&email, &password);
            if !errors.is_empty() {
                app.form_errors = errors;
                return Effect::None;
            }
            app.form_errors.clear();
            app.is_loading = true;
            app.status_message = String::from("Signing In...");
            Effect::SpawnLogin(LoginRequest { email, password })
        }
        Action::SubmitSignup {
            name,
            email,
            password,
        } => {
            if app.is_loading || app.screen != Screen::Signup {
                return Effect::None;
            }
            let errors = validate_signup(&name, &email, &password);
            if !errors.is_empty() {
                app.form_errors = errors;
                return Effect::None;
            }
            app.form_errors.clear();
            app.is_loading = true;
            app.status_message = String::from("Creating Account...");
            Effect::SpawnSignup(SignupRequest {
                name: name.trim().to_string(),
                email,
                password,
            })
        }
        Action::LoginCompleted(result) => {
            app.is_loading = false;
            app.status_message.clear();
            match result {
                Ok(user) => {
                    info!("Login succeeded for {}", user.email);
                    app.alert = Some(
                        Alert::success(
                            "Welcome Back!",
                            format!("Signed in as {}.", user.name),
                        )
                        .auto_dismiss(SUCCESS_ALERT_TIMEOUT),
                    );
                    app.user = Some(user.clone());
                    app.signed_in_at = Some(Utc::now());
                    app.screen = Screen::Dashboard(Tab::Home);
                    Effect::SaveUser(user)
                }
                Err(e) => {
                    info!("Login failed: {}", e);
                    app.alert = Some(Alert::error("Sign In Failed", e.to_string()));
                    Effect::None
                }
            }
        }
        Action::SignupCompleted(result) => {
            app.is_loading = false;
            app.status_message.clear();
            app.alert = Some(match result {
                Ok(user) => Alert::success(
                    "Account Created!",
                    format!(
                        "Welcome, {}! Your account is ready. Please sign in to continue.",
                        user.name
                    ),
                )
                .button("Sign In")
                .then(Screen::Login),
                Err(e) => Alert::error("Sign Up Failed", e.to_string()),
            });
            Effect::None
        }
        Action::DismissAlert => {
            if let Some(alert) = app.alert.take() {
                if alert.kind == AlertKind::Error {
                    app.form_errors.remove(&Field::Email);
                    app.form_errors.remove(&Field::Password);
                }
                if let Some(screen) = alert.then {
                    app.screen = screen;
                    app.form_errors.clear();
                }
            }
            Effect::None
        }
        Action::ClearFieldError(field) => {
            app.form_errors.remove(&field);
            Effect::None
        }
        Action::SelectTab(tab) => {
            if app.is_authenticated() && app.screen.tab().is_some() {
                app.screen = Screen::Dashboard(tab);
            }
            Effect::None
        }
        Action::Logout => {
            if !app.is_authenticated() {
                return Effect::None;
            }
            info!("Signing out");
            app.user = None;
            app.signed_in_at = None;
            app.alert = None;
            app.form_errors.clear();
            app.screen = Screen::Login;
            Effect::ClearUserCache
        }
        Action::Quit => Effect::Quit,
    }
}
