//! # Drag Tracker
//!
//! Converts left-button mouse drags into `GestureSample`s for the swipe
//! navigator. Terminal coordinates are cells, so displacement is scaled by the
//! configured cell size to approximate pixels.
//!
//! Release velocity is measured over the last 100ms of motion. A drag that
//! paused before release therefore reports a low velocity even if it moved fast
//! earlier. When fewer than two recent points exist, the average velocity of
//! the whole drag is used.

use std::time::{Duration, Instant};

use crate::core::gesture::{GesturePhase, GestureSample};

const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
struct ActiveDrag {
    origin: (u16, u16),
    started_at: Instant,
    /// (dx px, dy px, timestamp)
    points: Vec<(f32, f32, Instant)>,
}

#[derive(Debug, Clone)]
pub struct DragTracker {
    cell_width_px: f32,
    cell_height_px: f32,
    active: Option<ActiveDrag>,
}

impl DragTracker {
    pub fn new(cell_width_px: f32, cell_height_px: f32) -> Self {
        Self {
            cell_width_px,
            cell_height_px,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a drag. Any drag already in progress is replaced.
    pub fn press(&mut self, col: u16, row: u16, now: Instant) -> GestureSample {
        self.active = Some(ActiveDrag {
            origin: (col, row),
            started_at: now,
            points: vec![(0.0, 0.0, now)],
        });
        GestureSample::started()
    }

    pub fn drag(&mut self, col: u16, row: u16, now: Instant) -> Option<GestureSample> {
        let (dx, dy) = self.offset(col, row)?;
        let drag = self.active.as_mut()?;
        drag.points.push((dx, dy, now));
        drag.points
            .retain(|&(_, _, t)| now.saturating_duration_since(t) <= VELOCITY_WINDOW);
        let elapsed = now.saturating_duration_since(drag.started_at);
        let (vx, vy) = velocity(drag, dx, dy, elapsed);

        Some(
            GestureSample::new(GesturePhase::Moving, dx, dy)
                .with_velocity(vx, vy)
                .with_elapsed(elapsed),
        )
    }

    /// End the drag. A release on the press cell reports zero displacement.
    pub fn release(&mut self, col: u16, row: u16, now: Instant) -> Option<GestureSample> {
        let (dx, dy) = self.offset(col, row)?;
        let mut drag = self.active.take()?;
        drag.points.push((dx, dy, now));
        drag.points
            .retain(|&(_, _, t)| now.saturating_duration_since(t) <= VELOCITY_WINDOW);
        let elapsed = now.saturating_duration_since(drag.started_at);
        let (vx, vy) = velocity(&drag, dx, dy, elapsed);

        Some(
            GestureSample::new(GesturePhase::Released, dx, dy)
                .with_velocity(vx, vy)
                .with_elapsed(elapsed),
        )
    }

    /// Abandon the current drag, if any.
    pub fn cancel(&mut self) -> Option<GestureSample> {
        self.active.take().map(|_| GestureSample::cancelled())
    }

    fn offset(&self, col: u16, row: u16) -> Option<(f32, f32)> {
        let (origin_col, origin_row) = self.active.as_ref()?.origin;
        let dx = (f32::from(col) - f32::from(origin_col)) * self.cell_width_px;
        let dy = (f32::from(row) - f32::from(origin_row)) * self.cell_height_px;
        Some((dx, dy))
    }
}

/// Velocity in px/ms over the recent window, or the whole-drag average.
fn velocity(drag: &ActiveDrag, dx: f32, dy: f32, elapsed: Duration) -> (f32, f32) {
    if let (Some(first), Some(last)) = (drag.points.first(), drag.points.last()) {
        let dt = last.2.saturating_duration_since(first.2).as_secs_f32() * 1000.0;
        if drag.points.len() >= 2 && dt > 0.0 {
            return ((last.0 - first.0) / dt, (last.1 - first.1) / dt);
        }
    }
    let total = elapsed.as_secs_f32() * 1000.0;
    if total > 0.0 {
        (dx / total, dy / total)
    } else {
        (0.0, 0.0)
    }
}
