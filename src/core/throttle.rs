//! # Navigation Gate
//!
//! Rate limiting for tab changes. Two independent guards sit in front of every
//! navigation request:
//!
//! - **Debounce lock**: taken on each accepted request, released by `tick()` once
//!   the cooldown has elapsed. Requests that arrive while it is held are dropped.
//! - **Burst guard**: counts *attempts* (accepted or not) in a rolling window and
//!   drops anything beyond the limit, even if the lock is free.
//!
//! Nothing is queued. A dropped request is gone.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Accepted,
    Debounced,
    BurstLimited,
}

#[derive(Debug, Clone)]
pub struct NavigationGate {
    debounce: Duration,
    burst_limit: usize,
    burst_window: Duration,
    lock_held: bool,
    last_accepted_at: Option<Instant>,
    attempts: VecDeque<Instant>,
}

impl NavigationGate {
    pub fn new(debounce: Duration, burst_limit: usize, burst_window: Duration) -> Self {
        Self {
            debounce,
            burst_limit,
            burst_window,
            lock_held: false,
            last_accepted_at: None,
            attempts: VecDeque::new(),
        }
    }

    /// Release the debounce lock if its cooldown has run out.
    pub fn tick(&mut self, now: Instant) {
        if !self.lock_held {
            return;
        }
        if let Some(accepted_at) = self.last_accepted_at
            && now.saturating_duration_since(accepted_at) >= self.debounce
        {
            self.lock_held = false;
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock_held
    }

    pub fn last_accepted_at(&self) -> Option<Instant> {
        self.last_accepted_at
    }

    /// Number of attempts currently counted against the burst window.
    pub fn attempts_in_window(&self) -> usize {
        self.attempts.len()
    }

    /// Record an attempt at `now` and decide whether it may proceed.
    pub fn try_acquire(&mut self, now: Instant) -> GateDecision {
        self.tick(now);

        while let Some(&oldest) = self.attempts.front() {
            if now.saturating_duration_since(oldest) >= self.burst_window {
                self.attempts.pop_front();
            } else {
                break;
            }
        }
        self.attempts.push_back(now);

        if self.attempts.len() > self.burst_limit {
            return GateDecision::BurstLimited;
        }
        if self.lock_held {
            return GateDecision::Debounced;
        }

        self.lock_held = true;
        self.last_accepted_at = Some(now);
        GateDecision::Accepted
    }
}
