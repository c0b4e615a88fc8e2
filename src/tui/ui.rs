use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::tab_bar::TAB_BAR_HEIGHT;
use crate::tui::components::{
    AlertView, AuthForm, Splash, TabBar, TabContent, TitleBar,
};

/// Screen regions. The tab bar only exists on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub main: Rect,
    pub tab_bar: Option<Rect>,
}

pub fn screen_layout(area: Rect, screen: Screen) -> ScreenLayout {
    use Constraint::{Length, Min};
    if screen.tab().is_some() {
        let [title, main, tab_bar] =
            Layout::vertical([Length(1), Min(0), Length(TAB_BAR_HEIGHT)]).areas(area);
        ScreenLayout {
            title,
            main,
            tab_bar: Some(tab_bar),
        }
    } else {
        let [title, main] = Layout::vertical([Length(1), Min(0)]).areas(area);
        ScreenLayout {
            title,
            main,
            tab_bar: None,
        }
    }
}

fn location(screen: Screen) -> &'static str {
    match screen {
        Screen::Splash => "Loading",
        Screen::Login => "Sign In",
        Screen::Signup => "Sign Up",
        Screen::Dashboard(tab) => tab.title(),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, spinner_frame: usize) {
    let layout = screen_layout(frame.area(), app.screen);

    TitleBar::new(
        location(app.screen).to_string(),
        app.user.as_ref().map(|u| u.name.clone()),
        app.status_message.clone(),
    )
    .render(frame, layout.title);

    match app.screen {
        Screen::Splash => Splash::new(spinner_frame).render(frame, layout.main),
        Screen::Login | Screen::Signup => {
            let state = if app.screen == Screen::Login {
                &tui.login_form
            } else {
                &tui.signup_form
            };
            AuthForm {
                state,
                errors: &app.form_errors,
                is_loading: app.is_loading,
            }
            .render(frame, layout.main);
        }
        Screen::Dashboard(tab) => {
            TabContent {
                tab,
                user: app.user.as_ref(),
                signed_in_at: app.signed_in_at,
            }
            .render(frame, layout.main);
            if let Some(area) = layout.tab_bar {
                TabBar::new(tab).render(frame, area);
            }
        }
    }

    if let Some(alert) = &app.alert {
        AlertView { alert }.render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::User;
    use crate::core::config::ResolvedConfig;
    use crate::core::state::Alert;
    use crate::core::tab::Tab;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let tui = TuiState::new(&ResolvedConfig::default());
        terminal.draw(|f| draw_ui(f, app, &tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_has_tab_bar_only_on_dashboard() {
        let area = Rect::new(0, 0, 80, 24);
        let login = screen_layout(area, Screen::Login);
        assert!(login.tab_bar.is_none());
        assert_eq!(login.main.height, 23);

        let dashboard = screen_layout(area, Screen::Dashboard(Tab::Home));
        let tab_bar = dashboard.tab_bar.unwrap();
        assert_eq!(tab_bar.y, 24 - TAB_BAR_HEIGHT);
        assert_eq!(dashboard.main.height, 23 - TAB_BAR_HEIGHT);
    }

    #[test]
    fn test_draw_splash() {
        let app = test_app();
        let text = draw(&app);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_draw_login() {
        let mut app = test_app();
        app.screen = Screen::Login;
        let text = draw(&app);
        assert!(text.contains("Tabshell | Sign In"));
        assert!(text.contains("Welcome Back"));
    }

    #[test]
    fn test_draw_dashboard_with_alert() {
        let mut app = test_app();
        app.user = Some(User::new("1", "Demo User", "demo@example.com"));
        app.screen = Screen::Dashboard(Tab::About);
        app.alert = Some(Alert::success("Welcome Back!", "Signed in as Demo User."));

        let text = draw(&app);
        assert!(text.contains("Tabshell | About | Demo User"));
        assert!(text.contains("4 Profile"));
        assert!(text.contains("Welcome Back!"));
    }
}
