use std::time::{Duration, Instant};

use tabshell::core::gesture::GestureSample;
use tabshell::core::navigator::{NavigatorConfig, SwipeNavigator, TabHost};
use tabshell::core::tab::Tab;

// ============================================================================
// Helper Functions
// ============================================================================

/// Host that applies and records every navigation request.
struct Recorder {
    current: Tab,
    requests: Vec<Tab>,
}

impl Recorder {
    fn on(tab: Tab) -> Self {
        Self {
            current: tab,
            requests: Vec::new(),
        }
    }
}

impl TabHost for Recorder {
    fn current_tab(&self) -> Tab {
        self.current
    }

    fn request_navigation(&mut self, tab: Tab) {
        self.requests.push(tab);
        self.current = tab;
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Drive one drag: start at `at`, two moves, release after `duration`
/// with a release velocity of 0.5 px/ms in the direction of travel.
fn swipe(
    navigator: &mut SwipeNavigator,
    host: &mut Recorder,
    at: Instant,
    dx: f32,
    dy: f32,
    duration: Duration,
) {
    let velocity = dx.signum() * 0.5;
    navigator.on_sample(&GestureSample::started(), at, host);
    navigator.on_sample(&GestureSample::moving(dx / 2.0, dy / 2.0), at + duration / 4, host);
    navigator.on_sample(&GestureSample::moving(dx, dy), at + duration / 2, host);
    let release = GestureSample::released(dx, dy)
        .with_velocity(velocity, 0.0)
        .with_elapsed(duration);
    navigator.on_sample(&release, at + duration, host);
}

// ============================================================================
// Adjacency
// ============================================================================

#[test]
fn next_and_previous_are_inverse_permutations() {
    for tab in Tab::ALL {
        assert_eq!(tab.previous().next(), tab);
        assert_eq!(tab.next().previous(), tab);
    }
    let mut seen: Vec<Tab> = Tab::ALL.iter().map(|t| t.next()).collect();
    seen.sort_by_key(|t| t.index());
    assert_eq!(seen, Tab::ALL.to_vec());
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn clean_left_swipe_from_home_goes_to_shop() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);

    swipe(&mut navigator, &mut host, Instant::now(), -80.0, 5.0, ms(200));

    assert_eq!(host.requests, vec![Tab::Shop]);
}

#[test]
fn right_swipe_from_home_wraps_to_profile() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);

    swipe(&mut navigator, &mut host, Instant::now(), 90.0, 0.0, ms(300));

    assert_eq!(host.requests, vec![Tab::Profile]);
}

#[test]
fn diagonal_at_200ms_is_dropped() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);

    // Same duration as an ordinary swipe; ratio 80/70 is below the commit ratio
    swipe(&mut navigator, &mut host, Instant::now(), -80.0, 70.0, ms(200));

    assert!(host.requests.is_empty());
}

#[test]
fn slow_diagonal_is_dropped() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);

    swipe(&mut navigator, &mut host, Instant::now(), -80.0, 70.0, ms(400));

    assert!(host.requests.is_empty());
}

#[test]
fn vertical_flag_is_sticky() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    navigator.on_sample(&GestureSample::started(), start, &mut host);
    navigator.on_sample(&GestureSample::moving(2.0, 10.0), start + ms(20), &mut host);
    navigator.on_sample(&GestureSample::moving(3.0, 15.0), start + ms(40), &mut host);
    navigator.on_sample(&GestureSample::moving(4.0, 40.0), start + ms(60), &mut host);
    // Drifts far to the left afterwards
    navigator.on_sample(&GestureSample::moving(-90.0, 40.0), start + ms(200), &mut host);
    let release = GestureSample::released(-120.0, 40.0)
        .with_velocity(-0.9, 0.0)
        .with_elapsed(ms(400));
    navigator.on_sample(&release, start + ms(400), &mut host);

    assert!(host.requests.is_empty());
}

#[test]
fn short_fast_flick_commits() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::About);
    let start = Instant::now();

    // 35px is below the 50px distance threshold but above 0.6 of it
    navigator.on_sample(&GestureSample::started(), start, &mut host);
    let release = GestureSample::released(-35.0, 20.0)
        .with_velocity(-0.4, 0.0)
        .with_elapsed(ms(120));
    navigator.on_sample(&release, start + ms(120), &mut host);

    assert_eq!(host.requests, vec![Tab::Profile]);
}

#[test]
fn quick_flick_commits_against_its_provisional_direction() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    // Wind-up to the right records a provisional Right, then a fast flick left
    navigator.on_sample(&GestureSample::started(), start, &mut host);
    navigator.on_sample(&GestureSample::moving(30.0, 0.0), start + ms(30), &mut host);
    navigator.on_sample(&GestureSample::moving(-10.0, 2.0), start + ms(70), &mut host);
    let release = GestureSample::released(-40.0, 5.0)
        .with_velocity(-0.6, 0.0)
        .with_elapsed(ms(100));
    navigator.on_sample(&release, start + ms(100), &mut host);

    assert_eq!(host.requests, vec![Tab::Shop]);
}

#[test]
fn reversed_swipe_outside_flick_window_is_dropped() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    navigator.on_sample(&GestureSample::started(), start, &mut host);
    navigator.on_sample(&GestureSample::moving(-60.0, 0.0), start + ms(100), &mut host);
    let release = GestureSample::released(90.0, 0.0)
        .with_velocity(0.9, 0.0)
        .with_elapsed(ms(300));
    navigator.on_sample(&release, start + ms(300), &mut host);

    assert!(host.requests.is_empty());
}

// ============================================================================
// Rate limiting
// ============================================================================

#[test]
fn back_to_back_swipes_inside_debounce_navigate_once() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    swipe(&mut navigator, &mut host, start, -80.0, 0.0, ms(120));
    swipe(&mut navigator, &mut host, start + ms(130), -80.0, 0.0, ms(120));

    assert_eq!(host.requests, vec![Tab::Shop]);
}

#[test]
fn swipes_after_debounce_navigate_again() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    swipe(&mut navigator, &mut host, start, -80.0, 0.0, ms(120));
    swipe(&mut navigator, &mut host, start + ms(500), -80.0, 0.0, ms(120));

    assert_eq!(host.requests, vec![Tab::Shop, Tab::About]);
}

#[test]
fn burst_guard_caps_rapid_swipes() {
    let config = NavigatorConfig {
        debounce: ms(100),
        ..NavigatorConfig::default()
    };
    let mut navigator = SwipeNavigator::new(config.clone());
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    for i in 0..4 {
        swipe(&mut navigator, &mut host, start + ms(200 * i), -80.0, 0.0, ms(100));
    }

    assert!(host.requests.len() <= config.burst_limit);
    assert_eq!(host.requests, vec![Tab::Shop, Tab::About, Tab::Profile]);
}

#[test]
fn direct_navigation_shares_the_debounce() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Profile);
    let start = Instant::now();

    navigator.navigate_to_next(start, &mut host);
    navigator.navigate_to_previous(start + ms(50), &mut host);
    swipe(&mut navigator, &mut host, start + ms(60), 80.0, 0.0, ms(150));

    assert_eq!(host.requests, vec![Tab::Home]);
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn cancelled_gesture_never_navigates() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    navigator.on_sample(&GestureSample::started(), start, &mut host);
    navigator.on_sample(&GestureSample::moving(-60.0, 0.0), start + ms(50), &mut host);
    navigator.on_sample(&GestureSample::moving(-100.0, 0.0), start + ms(100), &mut host);
    navigator.on_sample(&GestureSample::cancelled(), start + ms(120), &mut host);
    // A stray release for the cancelled contact
    let release = GestureSample::released(-100.0, 0.0)
        .with_velocity(-1.0, 0.0)
        .with_elapsed(ms(130));
    navigator.on_sample(&release, start + ms(130), &mut host);

    assert!(host.requests.is_empty());
    assert!(!navigator.is_locked());
}

#[test]
fn bounce_after_cancel_is_ignored_until_settled() {
    let mut navigator = SwipeNavigator::default();
    let mut host = Recorder::on(Tab::Home);
    let start = Instant::now();

    navigator.on_sample(&GestureSample::started(), start, &mut host);
    navigator.on_sample(&GestureSample::cancelled(), start + ms(20), &mut host);

    // Inside the 200ms settle window
    swipe(&mut navigator, &mut host, start + ms(100), -80.0, 0.0, ms(80));
    assert!(host.requests.is_empty());

    // After it
    swipe(&mut navigator, &mut host, start + ms(400), -80.0, 0.0, ms(80));
    assert_eq!(host.requests, vec![Tab::Shop]);
}
