//! Routine management commands for CLI.

use std::error::Error;
use std::path::PathBuf;

use clap::Subcommand;
use routinely_core::{dates, Routine, Task};

use crate::common;

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Create a new routine
    Add {
        /// Routine name
        name: String,
        /// Date the routine starts (YYYY-MM-DD, defaults to today). For a
        /// one-off routine this is its single active date.
        #[arg(long)]
        date: Option<String>,
        /// Comma-separated weekdays (0=Sun..6=Sat) making the routine
        /// recurring, e.g. --days 1,3,5
        #[arg(long)]
        days: Option<String>,
        /// First date of the recurring range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Last date of the recurring range (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
        /// Task title; repeat for several tasks
        #[arg(long = "task")]
        tasks: Vec<String>,
    },
    /// List routines
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one routine with its tasks
    Show {
        /// Routine ID
        id: String,
    },
    /// Delete a routine
    Remove {
        /// Routine ID
        id: String,
    },
}

pub fn run(action: RoutineAction, file: &Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let path = common::snapshot_path(file)?;
    let mut snapshot = common::load_snapshot(&path)?;

    match action {
        RoutineAction::Add {
            name,
            date,
            days,
            from,
            until,
            tasks,
        } => {
            let created = common::anchor_date(&date)?;
            let created = dates::to_iso_date(created);

            let mut routine = match days {
                Some(raw) => Routine::recurring(name, created, parse_days(&raw)?),
                None => Routine::one_off(name, created),
            };

            match (from, until) {
                (Some(from), Some(until)) => {
                    if !routine.is_recurring {
                        return Err("--from/--until only apply to recurring routines".into());
                    }
                    routine = routine.with_date_range(from, until);
                }
                (None, None) => {}
                _ => return Err("--from and --until must be given together".into()),
            }

            for title in tasks {
                routine = routine.with_task(Task::new(title));
            }

            let id = routine.id.clone();
            snapshot.insert(routine);
            snapshot.save(&path)?;
            println!("Routine created: {id}");
        }
        RoutineAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot.routines)?);
            } else {
                for routine in &snapshot.routines {
                    let kind = if routine.is_recurring {
                        format!("recurring {:?}", routine.days_of_week)
                    } else {
                        format!("one-off {}", routine.created_date)
                    };
                    println!(
                        "{}  {}  ({kind}, {} tasks)",
                        routine.id,
                        routine.name,
                        routine.tasks.len()
                    );
                }
            }
        }
        RoutineAction::Show { id } => {
            let routine = snapshot
                .routine(&id)
                .ok_or_else(|| format!("no routine with id {id}"))?;
            println!("{}  {}", routine.id, routine.name);
            println!("created: {}", routine.created_date);
            if routine.is_recurring {
                println!("days: {:?}", routine.days_of_week);
                if let Some(range) = &routine.date_range {
                    println!("range: {} .. {}", range.start, range.end);
                }
            }
            for task in &routine.tasks {
                println!("  {}  {}", task.id, task.title);
            }
        }
        RoutineAction::Remove { id } => {
            let removed = snapshot.remove(&id)?;
            snapshot.save(&path)?;
            println!("Routine removed: {}", removed.name);
        }
    }
    Ok(())
}

fn parse_days(raw: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    raw.split(',')
        .map(|part| {
            let day: u8 = part
                .trim()
                .parse()
                .map_err(|_| format!("invalid weekday {part:?}"))?;
            if day > 6 {
                return Err(format!("weekday {day} out of range 0-6").into());
            }
            Ok(day)
        })
        .collect()
}
