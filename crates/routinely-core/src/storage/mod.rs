//! Host-side storage collaborator.
//!
//! The tracking engine only ever consumes in-memory routine snapshots; this
//! module is the stand-in for the remote document store when Routinely runs
//! from the CLI: a JSON snapshot of routines plus a TOML config file.

mod config;
mod snapshot;

pub use config::Config;
pub use snapshot::RoutineSnapshot;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/routinely[-dev]/` based on ROUTINELY_ENV.
///
/// Set ROUTINELY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ROUTINELY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("routinely-dev")
    } else {
        base_dir.join("routinely")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
