//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tabshell/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::core::navigator::NavigatorConfig;
use crate::core::user_cache;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TabshellConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub remember_user: Option<bool>,
    pub splash_ms: Option<u64>,
    pub auth_latency_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GestureConfig {
    pub distance_threshold: Option<f32>,
    pub velocity_threshold: Option<f32>,
    pub provisional_distance: Option<f32>,
    pub vertical_suppression_ratio: Option<f32>,
    pub vertical_min_distance: Option<f32>,
    pub horizontal_commit_ratio: Option<f32>,
    pub quick_flick_duration_ms: Option<u64>,
    pub quick_flick_distance_fraction: Option<f32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DebounceConfig {
    pub debounce_ms: Option<u64>,
    pub burst_limit: Option<usize>,
    pub burst_window_ms: Option<u64>,
    pub cancel_settle_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TerminalConfig {
    pub cell_width_px: Option<f32>,
    pub cell_height_px: Option<f32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SPLASH_MS: u64 = 1500;
pub const DEFAULT_AUTH_LATENCY_MS: u64 = 600;
pub const DEFAULT_CELL_WIDTH_PX: f32 = 8.0;
pub const DEFAULT_CELL_HEIGHT_PX: f32 = 16.0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub navigator: NavigatorConfig,
    pub remember_user: bool,
    pub user_cache_path: Option<PathBuf>,
    pub splash: Duration,
    pub auth_latency: Duration,
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

/// Built-in values with no user cache on disk.
impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            navigator: NavigatorConfig::default(),
            remember_user: false,
            user_cache_path: None,
            splash: Duration::from_millis(DEFAULT_SPLASH_MS),
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            cell_height_px: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub debounce_ms: Option<u64>,
    pub swipe_distance: Option<f32>,
    pub forget_user: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tabshell/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tabshell").join("config.toml"))
}

/// Load config from `~/.tabshell/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TabshellConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TabshellConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TabshellConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TabshellConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<TabshellConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TabshellConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# tabshell configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# remember_user = true               # keep the signed-in user between runs
# splash_ms = 1500
# auth_latency_ms = 600              # simulated sign-in round trip

# [gesture]
# distance_threshold = 50.0          # px, or TABSHELL_SWIPE_DISTANCE
# velocity_threshold = 0.3           # px/ms
# provisional_distance = 20.0        # px
# vertical_suppression_ratio = 2.0
# vertical_min_distance = 20.0       # px
# horizontal_commit_ratio = 1.5
# quick_flick_duration_ms = 150
# quick_flick_distance_fraction = 0.6

# [debounce]
# debounce_ms = 350                  # or TABSHELL_DEBOUNCE_MS
# burst_limit = 3
# burst_window_ms = 1000
# cancel_settle_ms = 200

# [terminal]
# cell_width_px = 8.0                # pixel size of one terminal cell
# cell_height_px = 16.0
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TabshellConfig, cli: &CliOverrides) -> ResolvedConfig {
    let defaults = NavigatorConfig::default();
    let gesture = &config.gesture;
    let debounce = &config.debounce;

    // Swipe distance: CLI → env → config → default
    let distance_threshold = cli
        .swipe_distance
        .or_else(|| env_parse::<f32>("TABSHELL_SWIPE_DISTANCE"))
        .or(gesture.distance_threshold);

    // Debounce: CLI → env → config → default
    let debounce_ms = cli
        .debounce_ms
        .or_else(|| env_parse::<u64>("TABSHELL_DEBOUNCE_MS"))
        .or(debounce.debounce_ms);

    let mut navigator = NavigatorConfig {
        distance_threshold: positive(
            "distance_threshold",
            distance_threshold,
            defaults.distance_threshold,
        ),
        velocity_threshold: positive(
            "velocity_threshold",
            gesture.velocity_threshold,
            defaults.velocity_threshold,
        ),
        provisional_distance: positive(
            "provisional_distance",
            gesture.provisional_distance,
            defaults.provisional_distance,
        ),
        vertical_suppression_ratio: positive(
            "vertical_suppression_ratio",
            gesture.vertical_suppression_ratio,
            defaults.vertical_suppression_ratio,
        ),
        vertical_min_distance: positive(
            "vertical_min_distance",
            gesture.vertical_min_distance,
            defaults.vertical_min_distance,
        ),
        horizontal_commit_ratio: positive(
            "horizontal_commit_ratio",
            gesture.horizontal_commit_ratio,
            defaults.horizontal_commit_ratio,
        ),
        quick_flick_duration: millis(gesture.quick_flick_duration_ms, defaults.quick_flick_duration),
        quick_flick_distance_fraction: positive(
            "quick_flick_distance_fraction",
            gesture.quick_flick_distance_fraction,
            defaults.quick_flick_distance_fraction,
        ),
        debounce: millis(debounce_ms, defaults.debounce),
        burst_limit: match debounce.burst_limit {
            Some(0) => {
                warn!("burst_limit must be at least 1, using {}", defaults.burst_limit);
                defaults.burst_limit
            }
            Some(limit) => limit,
            None => defaults.burst_limit,
        },
        burst_window: millis(debounce.burst_window_ms, defaults.burst_window),
        cancel_settle: millis(debounce.cancel_settle_ms, defaults.cancel_settle),
    };

    // The provisional direction must be recorded before a strict commit is possible
    if navigator.provisional_distance >= navigator.distance_threshold {
        warn!(
            "provisional_distance ({}) must be below distance_threshold ({}), using {} and {}",
            navigator.provisional_distance,
            navigator.distance_threshold,
            defaults.provisional_distance,
            defaults.distance_threshold
        );
        navigator.provisional_distance = defaults.provisional_distance;
        navigator.distance_threshold = defaults.distance_threshold;
    }

    if navigator.horizontal_commit_ratio > navigator.vertical_suppression_ratio {
        warn!(
            "horizontal_commit_ratio ({}) is stricter than vertical_suppression_ratio ({}); \
             ambiguous gestures will be dropped more often",
            navigator.horizontal_commit_ratio, navigator.vertical_suppression_ratio
        );
    }

    ResolvedConfig {
        navigator,
        remember_user: !cli.forget_user && config.general.remember_user.unwrap_or(true),
        user_cache_path: user_cache::default_path(),
        splash: Duration::from_millis(config.general.splash_ms.unwrap_or(DEFAULT_SPLASH_MS)),
        auth_latency: Duration::from_millis(
            config
                .general
                .auth_latency_ms
                .unwrap_or(DEFAULT_AUTH_LATENCY_MS),
        ),
        cell_width_px: positive(
            "cell_width_px",
            config.terminal.cell_width_px,
            DEFAULT_CELL_WIDTH_PX,
        ),
        cell_height_px: positive(
            "cell_height_px",
            config.terminal.cell_height_px,
            DEFAULT_CELL_HEIGHT_PX,
        ),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

/// Accept finite values above zero, otherwise fall back to `default`.
fn positive(name: &str, value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            warn!("{} must be a positive number (got {}), using {}", name, v, default);
            default
        }
        None => default,
    }
}

fn millis(value: Option<u64>, default: Duration) -> Duration {
    value.map(Duration::from_millis).unwrap_or(default)
}
