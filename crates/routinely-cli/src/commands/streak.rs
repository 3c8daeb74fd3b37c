//! Streak view.

use std::error::Error;
use std::path::PathBuf;

use routinely_core::compute_streak;

use crate::common;

pub fn run(date: &Option<String>, file: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let path = common::snapshot_path(file)?;
    let snapshot = common::load_snapshot(&path)?;
    let anchor = common::anchor_date(date)?;

    let streak = compute_streak(&snapshot.routines, anchor);
    let unit = if streak == 1 { "day" } else { "days" };
    println!("Current streak: {streak} {unit}");
    Ok(())
}
