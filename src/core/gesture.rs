//! # Gesture Classification
//!
//! Per-gesture tracking for the swipe navigator. A `GestureTracker` lives from
//! the `Started` sample to the `Released` or `Cancelled` one and answers a single
//! question on release: did this drag commit to a left or right swipe?
//!
//! ```text
//! Started ──► Moving* ──► Released ──► classify() ─► Ok(direction) | Err(Rejection)
//!                │
//!                ├── vertical dominance  → vertical = true (sticky)
//!                └── |dx| ≥ provisional  → provisional = Left | Right
//! ```
//!
//! Two acceptance paths exist on release:
//!
//! - **Strict**: distance, velocity and axis-ratio thresholds all pass, and the
//!   release direction matches the provisional direction seen while moving.
//! - **Quick flick**: a short gesture covering a fraction of the distance
//!   threshold commits even when the ratio test fails. This path ignores the
//!   provisional direction.
//!
//! Neither path accepts a gesture that was ever marked vertical.

use std::fmt;
use std::time::Duration;

use crate::core::navigator::NavigatorConfig;
use crate::core::tab::Tab;

/// Lifecycle phase of a drag sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Started,
    Moving,
    Released,
    Cancelled,
}

/// One observation of a drag, relative to where it started.
///
/// Displacements are in pixels, velocities in pixels per millisecond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub dx: f32,
    pub dy: f32,
    pub vx: f32,
    pub vy: f32,
    pub elapsed: Duration,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, dx: f32, dy: f32) -> Self {
        Self {
            phase,
            dx,
            dy,
            vx: 0.0,
            vy: 0.0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn started() -> Self {
        Self::new(GesturePhase::Started, 0.0, 0.0)
    }

    pub fn moving(dx: f32, dy: f32) -> Self {
        Self::new(GesturePhase::Moving, dx, dy)
    }

    pub fn released(dx: f32, dy: f32) -> Self {
        Self::new(GesturePhase::Released, dx, dy)
    }

    pub fn cancelled() -> Self {
        Self::new(GesturePhase::Cancelled, 0.0, 0.0)
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

/// Horizontal swipe direction, named after the finger's motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left; reveals the next tab.
    Left,
    /// Finger moved left-to-right; reveals the previous tab.
    Right,
}

impl SwipeDirection {
    /// Direction of a horizontal displacement. `None` for zero (or NaN).
    pub fn from_dx(dx: f32) -> Option<Self> {
        if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else if dx > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Tab this swipe leads to from `origin`.
    pub fn target(self, origin: Tab) -> Tab {
        match self {
            SwipeDirection::Left => origin.next(),
            SwipeDirection::Right => origin.previous(),
        }
    }
}

/// Why a released gesture did not commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Marked vertical while moving.
    Vertical,
    /// Released exactly where it started.
    NoMovement,
    BelowDistance,
    BelowVelocity,
    /// Neither axis dominated clearly enough.
    Ambiguous,
    /// Release direction differs from the provisional direction.
    Reversed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::Vertical => "vertical gesture",
            Rejection::NoMovement => "no horizontal movement",
            Rejection::BelowDistance => "below distance threshold",
            Rejection::BelowVelocity => "below velocity threshold",
            Rejection::Ambiguous => "ambiguous axis",
            Rejection::Reversed => "direction reversed before release",
        };
        f.write_str(reason)
    }
}

/// Transient state for a single continuous drag.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    origin: Tab,
    provisional: Option<SwipeDirection>,
    vertical: bool,
}

impl GestureTracker {
    /// Start tracking a drag whose frame of reference is `origin`.
    pub fn begin(origin: Tab) -> Self {
        Self {
            origin,
            provisional: None,
            vertical: false,
        }
    }

    pub fn origin(&self) -> Tab {
        self.origin
    }

    pub fn provisional(&self) -> Option<SwipeDirection> {
        self.provisional
    }

    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Fold an in-flight sample into the tracker.
    pub fn observe(&mut self, sample: &GestureSample, config: &NavigatorConfig) {
        if self.vertical {
            return;
        }

        let horizontal = sample.dx.abs();
        let vertical = sample.dy.abs();

        if vertical > horizontal * config.vertical_suppression_ratio
            && vertical > config.vertical_min_distance
        {
            self.vertical = true;
            self.provisional = None;
            return;
        }

        if horizontal >= config.provisional_distance {
            self.provisional = SwipeDirection::from_dx(sample.dx);
        }
    }

    /// Decide the outcome of the gesture given its release sample.
    pub fn classify(
        &self,
        release: &GestureSample,
        config: &NavigatorConfig,
    ) -> Result<SwipeDirection, Rejection> {
        if self.vertical {
            return Err(Rejection::Vertical);
        }

        let direction = SwipeDirection::from_dx(release.dx).ok_or(Rejection::NoMovement)?;

        let horizontal = release.dx.abs();
        let vertical = release.dy.abs();
        let speed = release.vx.abs();

        let quick_flick = release.elapsed < config.quick_flick_duration
            && horizontal > config.distance_threshold * config.quick_flick_distance_fraction
            && horizontal > vertical;
        if quick_flick {
            return Ok(direction);
        }

        if horizontal <= config.distance_threshold {
            return Err(Rejection::BelowDistance);
        }
        if speed <= config.velocity_threshold {
            return Err(Rejection::BelowVelocity);
        }
        if horizontal <= vertical * config.horizontal_commit_ratio {
            return Err(Rejection::Ambiguous);
        }

        match self.provisional {
            Some(provisional) if provisional == direction => Ok(direction),
            _ => Err(Rejection::Reversed),
        }
    }
}
