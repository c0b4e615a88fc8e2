//! # Swipe Tab Navigator
//!
//! Turns a stream of drag samples into at most one tab change per gesture.
//!
//! ```text
//!                 ┌──────────── start (bounce) ────────────┐
//!                 ▼                                        │
//!   Idle ──start──► Tracking ──end──► classify ─► gate ─► host.request_navigation()
//!    ▲               │    ▲
//!    │             cancel └── start (implicit cancel)
//!    │               ▼
//!    └── tick ── Settling { until }
//! ```
//!
//! The navigator never reports failure. Every rejected gesture or gated request
//! is a silent no-op for the host and a `debug!` line in the log.
//!
//! Time is always passed in (`now: Instant`), so every transition is a plain
//! function of the current state, the sample and the clock.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::core::gesture::{GesturePhase, GestureSample, GestureTracker, SwipeDirection};
use crate::core::tab::Tab;
use crate::core::throttle::{GateDecision, NavigationGate};

/// The navigator's view of whatever displays the tabs.
pub trait TabHost {
    /// Tab currently on screen. May lag behind the last request.
    fn current_tab(&self) -> Tab;

    /// Ask the host to show `tab`. Fire-and-forget.
    fn request_navigation(&mut self, tab: Tab);
}

/// Thresholds and timings for gesture classification and rate limiting.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    /// Minimum horizontal travel (px) for a strict commit.
    pub distance_threshold: f32,
    /// Minimum horizontal release velocity (px/ms) for a strict commit.
    pub velocity_threshold: f32,
    /// Horizontal travel (px) at which a provisional direction is recorded.
    pub provisional_distance: f32,
    /// `|dy| > |dx| * ratio` marks a gesture vertical.
    pub vertical_suppression_ratio: f32,
    /// `|dy|` must also exceed this (px) to mark a gesture vertical.
    pub vertical_min_distance: f32,
    /// `|dx| > |dy| * ratio` is required for a strict commit.
    pub horizontal_commit_ratio: f32,
    pub quick_flick_duration: Duration,
    /// Fraction of `distance_threshold` a quick flick must cover.
    pub quick_flick_distance_fraction: f32,
    pub debounce: Duration,
    pub burst_limit: usize,
    pub burst_window: Duration,
    /// Starts inside this window after a cancel are treated as bounces.
    pub cancel_settle: Duration,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 50.0,
            velocity_threshold: 0.3,
            provisional_distance: 20.0,
            vertical_suppression_ratio: 2.0,
            vertical_min_distance: 20.0,
            horizontal_commit_ratio: 1.5,
            quick_flick_duration: Duration::from_millis(150),
            quick_flick_distance_fraction: 0.6,
            debounce: Duration::from_millis(350),
            burst_limit: 3,
            burst_window: Duration::from_millis(1000),
            cancel_settle: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum GestureState {
    Idle,
    Tracking(GestureTracker),
    Settling { until: Instant },
}

/// Debounced swipe-to-tab controller for one dashboard session.
#[derive(Debug, Clone)]
pub struct SwipeNavigator {
    config: NavigatorConfig,
    gate: NavigationGate,
    gesture: GestureState,
}

impl SwipeNavigator {
    pub fn new(config: NavigatorConfig) -> Self {
        let gate = NavigationGate::new(config.debounce, config.burst_limit, config.burst_window);
        Self {
            config,
            gate,
            gesture: GestureState::Idle,
        }
    }

    /// True between an accepted start and its end or cancel.
    pub fn is_tracking(&self) -> bool {
        matches!(self.gesture, GestureState::Tracking(_))
    }

    /// True while the debounce lock is held.
    pub fn is_locked(&self) -> bool {
        self.gate.is_locked()
    }

    /// Advance timers: the debounce lock and the post-cancel settle window.
    pub fn tick(&mut self, now: Instant) {
        self.gate.tick(now);
        if let GestureState::Settling { until } = self.gesture
            && now >= until
        {
            self.gesture = GestureState::Idle;
        }
    }

    /// Route a sample to the matching phase callback.
    pub fn on_sample<H: TabHost + ?Sized>(
        &mut self,
        sample: &GestureSample,
        now: Instant,
        host: &mut H,
    ) {
        match sample.phase {
            GesturePhase::Started => self.on_gesture_start(now, host),
            GesturePhase::Moving => self.on_gesture_move(sample),
            GesturePhase::Released => self.on_gesture_end(sample, now, host),
            GesturePhase::Cancelled => self.on_gesture_cancel(now),
        }
    }

    pub fn on_gesture_start<H: TabHost + ?Sized>(&mut self, now: Instant, host: &H) {
        self.tick(now);
        match self.gesture {
            GestureState::Settling { .. } => {
                debug!("Gesture start ignored: bounce after cancel");
                return;
            }
            GestureState::Tracking(_) => {
                debug!("Gesture start while tracking: treating as cancel-then-start");
            }
            GestureState::Idle => {}
        }

        let origin = host.current_tab();
        debug!("Gesture started on {}", origin);
        self.gesture = GestureState::Tracking(GestureTracker::begin(origin));
    }

    pub fn on_gesture_move(&mut self, sample: &GestureSample) {
        if let GestureState::Tracking(tracker) = &mut self.gesture {
            let was_vertical = tracker.is_vertical();
            tracker.observe(sample, &self.config);
            if !was_vertical && tracker.is_vertical() {
                debug!(
                    "Gesture marked vertical (dx={:.1}, dy={:.1})",
                    sample.dx, sample.dy
                );
            }
        }
    }

    pub fn on_gesture_end<H: TabHost + ?Sized>(
        &mut self,
        sample: &GestureSample,
        now: Instant,
        host: &mut H,
    ) {
        self.tick(now);
        let tracker = match std::mem::replace(&mut self.gesture, GestureState::Idle) {
            GestureState::Tracking(tracker) => tracker,
            other => {
                self.gesture = other;
                debug!("Gesture end without an active gesture: ignored");
                return;
            }
        };

        match tracker.classify(sample, &self.config) {
            Ok(direction) => {
                let target = direction.target(tracker.origin());
                debug!(
                    "Swipe {:?} committed from {} (dx={:.1}, vx={:.2}, {}ms)",
                    direction,
                    tracker.origin(),
                    sample.dx,
                    sample.vx,
                    sample.elapsed.as_millis()
                );
                self.request(tracker.origin(), target, now, host);
            }
            Err(rejection) => {
                debug!(
                    "Gesture dropped: {} (dx={:.1}, dy={:.1}, vx={:.2})",
                    rejection, sample.dx, sample.dy, sample.vx
                );
            }
        }
    }

    pub fn on_gesture_cancel(&mut self, now: Instant) {
        if !self.is_tracking() {
            return;
        }
        debug!("Gesture cancelled");
        self.gesture = GestureState::Settling {
            until: now + self.config.cancel_settle,
        };
    }

    /// Go to the next tab without a gesture. Same gate as swipes.
    pub fn navigate_to_next<H: TabHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let origin = host.current_tab();
        self.request(origin, SwipeDirection::Left.target(origin), now, host);
    }

    /// Go to the previous tab without a gesture. Same gate as swipes.
    pub fn navigate_to_previous<H: TabHost + ?Sized>(&mut self, now: Instant, host: &mut H) {
        let origin = host.current_tab();
        self.request(origin, SwipeDirection::Right.target(origin), now, host);
    }

    fn request<H: TabHost + ?Sized>(&mut self, from: Tab, to: Tab, now: Instant, host: &mut H) {
        match self.gate.try_acquire(now) {
            GateDecision::Accepted => {
                info!("Navigate: {} -> {}", from, to);
                host.request_navigation(to);
            }
            GateDecision::Debounced => {
                let since = self
                    .gate
                    .last_accepted_at()
                    .map(|at| now.saturating_duration_since(at).as_millis())
                    .unwrap_or_default();
                debug!(
                    "Navigation blocked (debounce, {}ms since last): {} -> {}",
                    since, from, to
                )
            }
            GateDecision::BurstLimited => debug!(
                "Navigation blocked (burst limit, {} attempts in window): {} -> {}",
                self.gate.attempts_in_window(),
                from,
                to
            ),
        }
    }
}

impl Default for SwipeNavigator {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingHost;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn left_swipe(navigator: &mut SwipeNavigator, host: &mut RecordingHost, start: Instant) {
        navigator.on_gesture_start(start, host);
        navigator.on_gesture_move(&GestureSample::moving(-30.0, 1.0));
        navigator.on_gesture_move(&GestureSample::moving(-70.0, 3.0));
        let release = GestureSample::released(-90.0, 4.0)
            .with_velocity(-0.9, 0.0)
            .with_elapsed(ms(300));
        navigator.on_gesture_end(&release, start + ms(300), host);
    }

    #[test]
    fn test_swipe_uses_origin_captured_at_start() {
        let mut navigator = SwipeNavigator::default();
        let mut host = RecordingHost::new(Tab::Shop);
        let t0 = Instant::now();

        navigator.on_gesture_start(t0, &host);
        // Host changes tab underneath the gesture
        host.current = Tab::Profile;
        navigator.on_gesture_move(&GestureSample::moving(-40.0, 0.0));
        let release = GestureSample::released(-80.0, 0.0)
            .with_velocity(-1.0, 0.0)
            .with_elapsed(ms(400));
        navigator.on_gesture_end(&release, t0 + ms(400), &mut host);

        assert_eq!(host.requests, vec![Tab::About]);
    }

    #[test]
    fn test_move_and_end_without_start_are_ignored() {
        let mut navigator = SwipeNavigator::default();
        let mut host = RecordingHost::new(Tab::Home);
        let t0 = Instant::now();

        navigator.on_gesture_move(&GestureSample::moving(-80.0, 0.0));
        let release = GestureSample::released(-80.0, 0.0)
            .with_velocity(-1.0, 0.0)
            .with_elapsed(ms(100));
        navigator.on_gesture_end(&release, t0, &mut host);

        assert!(host.requests.is_empty());
        assert!(!navigator.is_tracking());
    }

    #[test]
    fn test_double_start_restarts_tracking() {
        let mut navigator = SwipeNavigator::default();
        let mut host = RecordingHost::new(Tab::Home);
        let t0 = Instant::now();

        navigator.on_gesture_start(t0, &host);
        navigator.on_gesture_move(&GestureSample::moving(0.0, 80.0));
        // Second start wipes the vertical mark from the first contact
        navigator.on_gesture_start(t0 + ms(10), &host);
        navigator.on_gesture_move(&GestureSample::moving(-40.0, 0.0));
        let release = GestureSample::released(-90.0, 0.0)
            .with_velocity(-1.0, 0.0)
            .with_elapsed(ms(300));
        navigator.on_gesture_end(&release, t0 + ms(310), &mut host);

        assert_eq!(host.requests, vec![Tab::Shop]);
    }

    #[test]
    fn test_start_inside_settle_window_is_a_bounce() {
        let mut navigator = SwipeNavigator::default();
        let mut host = RecordingHost::new(Tab::Home);
        let t0 = Instant::now();

        navigator.on_gesture_start(t0, &host);
        navigator.on_gesture_move(&GestureSample::moving(-80.0, 0.0));
        navigator.on_gesture_cancel(t0 + ms(100));
        assert!(!navigator.is_tracking());

        left_swipe(&mut navigator, &mut host, t0 + ms(150));
        assert!(host.requests.is_empty());

        left_swipe(&mut navigator, &mut host, t0 + ms(400));
        assert_eq!(host.requests, vec![Tab::Shop]);
    }

    #[test]
    fn test_tick_ends_settle_window() {
        let mut navigator = SwipeNavigator::default();
        let host = RecordingHost::new(Tab::Home);
        let t0 = Instant::now();

        navigator.on_gesture_start(t0, &host);
        navigator.on_gesture_cancel(t0);
        navigator.tick(t0 + ms(200));
        navigator.on_gesture_start(t0 + ms(200), &host);
        assert!(navigator.is_tracking());
    }

    #[test]
    fn test_direct_navigation_goes_through_gate() {
        let mut navigator = SwipeNavigator::default();
        let mut host = RecordingHost::new(Tab::Profile);
        let t0 = Instant::now();

        navigator.navigate_to_next(t0, &mut host);
        navigator.navigate_to_previous(t0 + ms(50), &mut host);
        assert_eq!(host.requests, vec![Tab::Home]);

        navigator.navigate_to_previous(t0 + ms(400), &mut host);
        assert_eq!(host.requests, vec![Tab::Home, Tab::Profile]);
    }

    #[test]
    fn test_on_sample_dispatches_by_phase() {
        let mut navigator = SwipeNavigator::default();
        let mut host = RecordingHost::new(Tab::About);
        let t0 = Instant::now();

        let samples = [
            GestureSample::started(),
            GestureSample::moving(25.0, 0.0),
            GestureSample::moving(70.0, 2.0),
            GestureSample::released(95.0, 3.0)
                .with_velocity(0.7, 0.0)
                .with_elapsed(ms(320)),
        ];
        for (step, sample) in samples.iter().enumerate() {
            navigator.on_sample(sample, t0 + ms(step as u64 * 100), &mut host);
        }

        assert_eq!(host.requests, vec![Tab::Shop]);
    }

    #[test]
    fn test_lock_is_released_by_timer() {
        let mut navigator = SwipeNavigator::default();
        let mut host = RecordingHost::new(Tab::Home);
        let t0 = Instant::now();

        navigator.navigate_to_next(t0, &mut host);
        assert!(navigator.is_locked());
        navigator.tick(t0 + ms(350));
        assert!(!navigator.is_locked());
    }
}
