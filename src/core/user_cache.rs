//! # User Cache
//!
//! Remembers the signed-in user between runs in `~/.tabshell/user.json`.
//!
//! Only one record is ever stored. Writes use atomic rename (write `.tmp`, then
//! `rename()`) so a crash mid-write leaves the previous record intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::auth::User;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("user cache I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("user cache is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// The stored record: the user plus when it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedUser {
    pub user: User,
    pub cached_at: DateTime<Utc>,
}

/// Returns `~/.tabshell/user.json`.
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tabshell").join("user.json"))
}

/// Read the cached user. `Ok(None)` when nothing has been cached.
pub fn load_user(path: &Path) -> Result<Option<CachedUser>, CacheError> {
    if !path.exists() {
        debug!("No cached user at {}", path.display());
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let cached: CachedUser = serde_json::from_str(&contents)?;
    info!("Loaded cached user {} from {}", cached.user.email, path.display());
    Ok(Some(cached))
}

/// Replace the cached user.
pub fn save_user(path: &Path, user: &User) -> Result<CachedUser, CacheError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let cached = CachedUser {
        user: user.clone(),
        cached_at: Utc::now(),
    };
    let json = serde_json::to_string_pretty(&cached)?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    debug!("Cached user {} at {}", user.email, path.display());
    Ok(cached)
}

/// Forget the cached user. Missing files are fine.
pub fn clear(path: &Path) -> Result<(), CacheError> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Cleared user cache at {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
