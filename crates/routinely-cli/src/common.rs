//! Shared helpers for CLI commands.

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use routinely_core::{dates, Config, RoutineSnapshot};

/// Resolve the snapshot location: explicit `--file` wins over config.
pub fn snapshot_path(file: &Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    match file {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::load_or_default().snapshot_path()?),
    }
}

pub fn load_snapshot(path: &Path) -> Result<RoutineSnapshot, Box<dyn Error>> {
    Ok(RoutineSnapshot::load(path)?)
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to the local day.
pub fn anchor_date(arg: &Option<String>) -> Result<NaiveDate, Box<dyn Error>> {
    match arg {
        Some(raw) => dates::parse_iso_date(raw)
            .ok_or_else(|| format!("invalid date {raw:?}, expected YYYY-MM-DD").into()),
        None => Ok(dates::date_only(&Local::now())),
    }
}
