//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values and
//! swipe navigator callbacks.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Gesture Flow
//!
//! ```text
//! mouse Down/Drag/Up ──► DragTracker ──► GestureSample ──► SwipeNavigator
//!                                                              │
//!                                   App (TabHost) ◄────────────┘
//!                                   request_navigation → Action::SelectTab
//! ```
//!
//! The navigator exists only while the dashboard is shown. Leaving the
//! dashboard drops it along with any pending debounce state.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (splash, auth request in flight): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background actions.

mod component;
mod components;
mod drag;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, LoginRequest, SignupRequest, update};
use crate::core::auth::{AuthProvider, MockAuthProvider};
use crate::core::config::ResolvedConfig;
use crate::core::navigator::{NavigatorConfig, SwipeNavigator};
use crate::core::state::{Alert, App, Screen};
use crate::core::tab::Tab;
use crate::core::user_cache;
use crate::core::validation::Field;
use crate::tui::component::EventHandler;
use crate::tui::components::tab_bar;
use crate::tui::components::{AuthFormState, FormEvent, FormKind};
use crate::tui::drag::DragTracker;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub login_form: AuthFormState,
    pub signup_form: AuthFormState,
    pub drag: DragTracker,
    /// Present only while the dashboard is shown.
    pub navigator: Option<SwipeNavigator>,
    navigator_config: NavigatorConfig,
    /// Screen as of the last `sync`.
    screen: Screen,
    /// The alert on screen and when it first appeared.
    alert_seen: Option<(Alert, Instant)>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            login_form: AuthFormState::new(FormKind::Login),
            signup_form: AuthFormState::new(FormKind::Signup),
            drag: DragTracker::new(config.cell_width_px, config.cell_height_px),
            navigator: None,
            navigator_config: config.navigator.clone(),
            screen: Screen::Splash,
            alert_seen: None,
        }
    }

    /// React to a screen change made by `update()`.
    pub fn sync(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        let previous = std::mem::replace(&mut self.screen, screen);
        debug!("Screen changed: {:?} -> {:?}", previous, screen);

        match (previous.tab(), screen.tab()) {
            (None, Some(_)) => {
                self.navigator = Some(SwipeNavigator::new(self.navigator_config.clone()));
                self.login_form.reset();
                self.signup_form.reset();
                debug!("Swipe navigator attached");
            }
            (Some(_), None) => {
                self.navigator = None;
                self.drag.cancel();
                debug!("Swipe navigator detached");
            }
            _ => {}
        }

        if previous == Screen::Signup
            && screen == Screen::Login
            && self.login_form.field(Field::Email).value().is_empty()
        {
            let email = self.signup_form.field(Field::Email).value().to_string();
            self.login_form.set_email(&email);
        }
    }

    /// Whether the current alert has been up longer than its auto-dismiss time.
    pub fn alert_expired(&mut self, alert: Option<&Alert>, now: Instant) -> bool {
        let Some(alert) = alert else {
            self.alert_seen = None;
            return false;
        };
        let shown_at = match &self.alert_seen {
            Some((seen, at)) if seen == alert => *at,
            _ => {
                self.alert_seen = Some((alert.clone(), now));
                now
            }
        };
        alert
            .auto_dismiss
            .is_some_and(|after| now.saturating_duration_since(shown_at) >= after)
    }

    /// Abandon an in-progress drag, telling the navigator.
    fn cancel_drag(&mut self, now: Instant) {
        if let Some(sample) = self.drag.cancel()
            && let Some(navigator) = self.navigator.as_mut()
        {
            navigator.on_gesture_cancel(now);
            debug!("Drag cancelled ({:?})", sample.phase);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            EnableFocusChange,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, focus change, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Load the remembered user, or forget it when remembering is off.
fn restore_user(app: &mut App, config: &ResolvedConfig) {
    let Some(path) = config.user_cache_path.as_deref() else {
        return;
    };
    if !config.remember_user {
        if let Err(e) = user_cache::clear(path) {
            warn!("Failed to clear user cache: {}", e);
        }
        return;
    }
    match user_cache::load_user(path) {
        Ok(Some(cached)) => app.restore(cached),
        Ok(None) => {}
        Err(e) => warn!("Ignoring unreadable user cache: {}", e),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let auth: Arc<dyn AuthProvider> = Arc::new(MockAuthProvider::new(config.auth_latency));
    info!("Using {} auth provider", auth.name());
    let mut app = App::new(auth);
    restore_user(&mut app, &config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let now = Instant::now();

        // Timers: splash, alert auto-dismiss, debounce/settle expiry
        if app.screen == Screen::Splash && now.duration_since(start_time) >= config.splash {
            update(&mut app, Action::SplashFinished);
            needs_redraw = true;
        }
        if tui.alert_expired(app.alert.as_ref(), now) {
            update(&mut app, Action::DismissAlert);
            needs_redraw = true;
        }
        if let Some(navigator) = tui.navigator.as_mut() {
            navigator.tick(now);
        }
        tui.sync(app.screen);

        let animating = app.screen == Screen::Splash || app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short timeout while something is counting down or a drag is live
        let timeout = if animating || app.alert.is_some() || tui.drag.is_active() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let area = terminal.get_frame().area();
            let effect = handle_event(&mut app, &mut tui, event, area, Instant::now());
            tui.sync(app.screen);
            if apply_effect(effect, &mut app, &config, &tx) {
                break 'event_loop;
            }
        }

        // Handle background task actions (auth results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            tui.sync(app.screen);
            if apply_effect(effect, &mut app, &config, &tx) {
                break 'event_loop;
            }
        }
    }

    ratatui::restore();
    info!("Tabshell shutting down");
    Ok(())
}

/// Route one terminal event. Returns the effect of any resulting action.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    area: Rect,
    now: Instant,
) -> Effect {
    match event {
        // ForceQuit (Ctrl+C) always quits regardless of screen
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    // An open alert captures all input
    if app.alert.is_some() {
        tui.cancel_drag(now);
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => update(app, Action::DismissAlert),
            _ => Effect::None,
        };
    }

    match app.screen {
        Screen::Splash => Effect::None,
        Screen::Login | Screen::Signup => handle_form_event(app, tui, event),
        Screen::Dashboard(_) => handle_dashboard_event(app, tui, event, area, now),
    }
}

fn handle_form_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ShowSignup => return update(app, Action::ShowSignup),
        TuiEvent::ShowLogin => return update(app, Action::ShowLogin),
        _ if app.is_loading => return Effect::None,
        _ => {}
    }

    let form = if app.screen == Screen::Login {
        &mut tui.login_form
    } else {
        &mut tui.signup_form
    };
    match form.handle_event(&event) {
        Some(FormEvent::Submit) => {
            let action = form.submit_action();
            update(app, action)
        }
        Some(FormEvent::Edited(field)) => update(app, Action::ClearFieldError(field)),
        None => Effect::None,
    }
}

fn handle_dashboard_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    area: Rect,
    now: Instant,
) -> Effect {
    let Some(navigator) = tui.navigator.as_mut() else {
        return Effect::None;
    };

    match event {
        TuiEvent::CursorRight => navigator.navigate_to_next(now, app),
        TuiEvent::CursorLeft => navigator.navigate_to_previous(now, app),
        TuiEvent::InputChar(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                return update(app, Action::SelectTab(tab));
            }
        }
        TuiEvent::InputChar('x') => return update(app, Action::Logout),
        TuiEvent::InputChar('q') => return update(app, Action::Quit),
        TuiEvent::MouseDown(col, row) => {
            let layout = ui::screen_layout(area, app.screen);
            if let Some(tab) = layout
                .tab_bar
                .and_then(|bar| tab_bar::hit_test(bar, col, row))
            {
                // Bottom-bar taps are direct selections, not gestures
                tui.drag.cancel();
                return update(app, Action::SelectTab(tab));
            }
            let sample = tui.drag.press(col, row, now);
            navigator.on_sample(&sample, now, app);
        }
        TuiEvent::MouseDrag(col, row) => {
            if let Some(sample) = tui.drag.drag(col, row, now) {
                navigator.on_sample(&sample, now, app);
            }
        }
        TuiEvent::MouseUp(col, row) => {
            if let Some(release) = tui.drag.release(col, row, now) {
                navigator.on_sample(&release, now, app);
            }
        }
        TuiEvent::FocusLost | TuiEvent::Escape => {
            if let Some(sample) = tui.drag.cancel() {
                navigator.on_sample(&sample, now, app);
            }
        }
        _ => {}
    }
    Effect::None
}

/// Carry out an effect. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    app: &mut App,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::SpawnLogin(request) => spawn_login(app, request, tx.clone()),
        Effect::SpawnSignup(request) => spawn_signup(app, request, tx.clone()),
        Effect::SaveUser(user) => {
            if config.remember_user
                && let Some(path) = config.user_cache_path.as_deref()
            {
                match user_cache::save_user(path, &user) {
                    Ok(cached) => app.signed_in_at = Some(cached.cached_at),
                    Err(e) => warn!("Failed to cache user: {}", e),
                }
            }
        }
        Effect::ClearUserCache => {
            if let Some(path) = config.user_cache_path.as_deref()
                && let Err(e) = user_cache::clear(path)
            {
                warn!("Failed to clear user cache: {}", e);
            }
        }
    }
    false
}

fn spawn_login(app: &App, request: LoginRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning sign-in for {}", request.email);
    let auth = app.auth.clone();
    tokio::spawn(async move {
        let result = auth.login(&request.email, &request.password).await;
        if tx.send(Action::LoginCompleted(result)).is_err() {
            warn!("Failed to send sign-in result: receiver dropped");
        }
    });
}

fn spawn_signup(app: &App, request: SignupRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning sign-up for {}", request.email);
    let auth = app.auth.clone();
    tokio::spawn(async move {
        let result = auth
            .signup(&request.name, &request.email, &request.password)
            .await;
        if tx.send(Action::SignupCompleted(result)).is_err() {
            warn!("Failed to send sign-up result: receiver dropped");
        }
    });
}
