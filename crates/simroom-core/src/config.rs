//! Persistent configuration for simroom.
//!
//! Stores user settings in `~/.simroom/config.json`. Currently this holds the
//! UDID to target when a command is not told which simulator to use.
//!
//! # Example
//!
//! ```no_run
//! use simroom_core::config::SimroomConfig;
//!
//! // Load (returns defaults if file doesn't exist)
//! let config = SimroomConfig::load();
//!
//! println!("Default simulator: {}", config.default_udid_or_booted());
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::simulator::Simulator;

const CONFIG_FILENAME: &str = "config.json";

/// Errors that can occur while saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Failed to serialize the configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while writing the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the simroom data directory (`~/.simroom`), if a home directory exists.
pub fn simroom_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".simroom"))
}

/// Persistent simroom configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SimroomConfig {
    /// UDID used when no simulator is named explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_udid: Option<String>,
}

impl SimroomConfig {
    /// Load config from `~/.simroom/config.json`.
    ///
    /// Returns [`Default`] if the file does not exist or cannot be parsed.
    pub fn load() -> Self {
        match simroom_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILENAME)),
            None => Self::default(),
        }
    }

    /// Load config from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no config file, using defaults");
                return Self::default();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            debug!(path = %path.display(), error = %e, "unparseable config, using defaults");
            Self::default()
        })
    }

    /// Save config to `~/.simroom/config.json`.
    pub fn save(&self) -> Result<(), ConfigError> {
        let dir = simroom_dir().ok_or(ConfigError::NoHomeDir)?;
        self.save_to(&dir.join(CONFIG_FILENAME))
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The configured UDID, or simctl's `booted` alias.
    pub fn default_udid_or_booted(&self) -> &str {
        self.default_udid.as_deref().unwrap_or(Simulator::DEFAULT_TARGET_UDID)
    }
}
