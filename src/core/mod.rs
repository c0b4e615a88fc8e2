//! # Core Application Logic
//!
//! This module contains the shell's business logic and the swipe navigator.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • SwipeNavigator       │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, screens and alerts
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`tab`]: The four dashboard tabs and their cyclic order
//! - [`gesture`]: Gesture samples and release classification
//! - [`throttle`]: Debounce and burst limiting for navigation requests
//! - [`navigator`]: Turns gestures into tab navigation on a `TabHost`
//! - [`validation`]: Form field rules
//! - [`auth`]: Mock credential store
//! - [`user_cache`]: Remembers the signed-in user between runs
//! - [`config`]: TOML configuration with env and CLI overrides

pub mod action;
pub mod auth;
pub mod config;
pub mod gesture;
pub mod navigator;
pub mod state;
pub mod tab;
pub mod throttle;
pub mod user_cache;
pub mod validation;
