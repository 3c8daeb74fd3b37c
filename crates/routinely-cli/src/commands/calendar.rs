//! Calendar marker view around an anchor day.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use routinely_core::{Config, DayMarker, DayStatus, MarkerBuilder};

use crate::common;

pub fn run(
    date: &Option<String>,
    window: Option<i64>,
    json: bool,
    file: &Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let path = common::snapshot_path(file)?;
    let snapshot = common::load_snapshot(&path)?;
    let anchor = common::anchor_date(date)?;

    let window = window.unwrap_or_else(|| Config::load_or_default().window_days);
    let markers = MarkerBuilder::with_window(window).build(&snapshot.routines, anchor);

    // Render in calendar order; the engine's map is unordered.
    let ordered: BTreeMap<String, DayMarker> = markers.into_iter().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&ordered)?);
        return Ok(());
    }

    if ordered.is_empty() {
        println!("No marked days");
        return Ok(());
    }

    for (iso, marker) in ordered {
        let status = match marker.status {
            DayStatus::Completed => "completed",
            DayStatus::InProgress => "in progress",
            DayStatus::Failed => "failed",
        };
        println!("{iso}  {status}");
    }
    Ok(())
}
