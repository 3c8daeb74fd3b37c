//! Day view: active routines with completion and status.

use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use routinely_core::{classify, completion_state, dates, is_active_on, DayStatus};

use crate::common;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayEntry {
    id: String,
    name: String,
    completed_count: usize,
    total_count: usize,
    status: Option<DayStatus>,
}

pub fn run(date: &Option<String>, json: bool, file: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let path = common::snapshot_path(file)?;
    let snapshot = common::load_snapshot(&path)?;
    let anchor = common::anchor_date(date)?;
    let iso = dates::to_iso_date(anchor);

    let entries: Vec<DayEntry> = snapshot
        .routines
        .iter()
        .filter(|routine| is_active_on(routine, anchor))
        .map(|routine| {
            let agg = completion_state(routine, &iso);
            DayEntry {
                id: routine.id.clone(),
                name: routine.name.clone(),
                completed_count: agg.completed_count,
                total_count: agg.total_count,
                status: classify(routine, &iso, anchor),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Nothing scheduled for {iso}");
        return Ok(());
    }

    println!("Routines for {iso}:");
    for entry in entries {
        let status = match entry.status {
            Some(DayStatus::Completed) => "completed",
            Some(DayStatus::InProgress) => "in progress",
            Some(DayStatus::Failed) => "failed",
            None => "untouched",
        };
        println!(
            "  {}  {}/{}  {status}  ({})",
            entry.name, entry.completed_count, entry.total_count, entry.id
        );
    }
    Ok(())
}
