//! Task completion commands for CLI.

use std::error::Error;
use std::path::PathBuf;

use clap::Subcommand;
use routinely_core::dates;

use crate::common;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Mark a task completed for a date
    Done {
        /// Routine ID
        routine_id: String,
        /// Task ID
        task_id: String,
        /// Date to record against (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Clear a task's completion for a date
    Undo {
        /// Routine ID
        routine_id: String,
        /// Task ID
        task_id: String,
        /// Date to record against (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: TaskAction, file: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let path = common::snapshot_path(file)?;
    let mut snapshot = common::load_snapshot(&path)?;

    let (routine_id, task_id, date, done) = match action {
        TaskAction::Done {
            routine_id,
            task_id,
            date,
        } => (routine_id, task_id, date, true),
        TaskAction::Undo {
            routine_id,
            task_id,
            date,
        } => (routine_id, task_id, date, false),
    };

    let iso = dates::to_iso_date(common::anchor_date(&date)?);
    snapshot.set_task_completion(&routine_id, &task_id, &iso, done)?;
    snapshot.save(&path)?;

    println!(
        "Task {} {} for {iso}",
        task_id,
        if done { "completed" } else { "cleared" }
    );
    Ok(())
}
