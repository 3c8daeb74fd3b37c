//! TOML-based application configuration.
//!
//! Stores host preferences for the tracking views:
//! - Calendar marker window size
//! - Snapshot file override
//!
//! Configuration is stored at `~/.config/routinely/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::tracking::DEFAULT_WINDOW_DAYS;

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}

/// Host configuration for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Days enumerated on each side of "today" when building markers.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// Snapshot file path override. Defaults to `routines.json` in the
    /// data directory.
    #[serde(default)]
    pub snapshot_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_days: default_window_days(),
            snapshot_file: None,
        }
    }
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_or_default() -> Config {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                log::debug!("using default config: {err}");
                Config::default()
            }
        }
    }

    /// Load the config from disk.
    pub fn load() -> Result<Config> {
        let path = Self::path()?;
        let raw = std::fs::read_to_string(&path).map_err(|err| ConfigError::LoadFailed {
            path: path.clone(),
            message: err.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|err| ConfigError::LoadFailed {
            path,
            message: err.to_string(),
        })?;
        Ok(config)
    }

    /// Persist the config to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|err| ConfigError::SaveFailed {
            path: path.clone(),
            message: err.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|err| ConfigError::SaveFailed {
            path,
            message: err.to_string(),
        })?;
        Ok(())
    }

    /// Resolve the snapshot file location.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        match &self.snapshot_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("routines.json")),
        }
    }
}
