//! Routine and task value objects.
//!
//! These mirror the documents synced from the remote store: camelCase field
//! names on the wire, completion recorded per date per task in an accreting
//! `completedDates` map that the engine reads but never prunes.
//!
//! The derivation functions in [`crate::tracking`] treat these as immutable
//! snapshots. Host-side edits go through the constructors and
//! [`Routine::with_task_completion`], which build new values instead of
//! mutating in place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-date completion flags, keyed by task id.
pub type TaskCompletions = HashMap<String, bool>;

/// Accreting map of `YYYY-MM-DD` -> task id -> completed.
pub type CompletionMap = HashMap<String, TaskCompletions>;

/// Display time window for a task within its day.
///
/// Used only for ordering in the UI; completion is day-granular regardless
/// of these bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// `HH:mm` start, if the task has one.
    pub start: Option<String>,
    /// `HH:mm` end, if the task has one.
    pub end: Option<String>,
}

/// A single task inside a routine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique within the parent routine.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub time_range: TimeRange,
    /// Reminder offsets in minutes before the task start. Not interpreted
    /// by the tracking engine.
    #[serde(default)]
    pub reminders: Vec<i64>,
}

impl Task {
    /// Create a task with a fresh id and no time window.
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            time_range: TimeRange::default(),
            reminders: Vec::new(),
        }
    }
}

/// Inclusive date bounds for a recurring routine, as stored (`YYYY-MM-DD`).
///
/// Bounds are parsed lazily; a malformed bound disables the routine rather
/// than failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// A named, schedulable bundle of tasks.
///
/// Either one-off (active exactly on `created_date`) or recurring (weekly
/// pattern, optionally bounded by `date_range`, floored at `created_date`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub name: String,
    /// Insertion order is display order.
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub is_recurring: bool,
    /// 0 = Sunday ... 6 = Saturday. Empty means the routine never recurs.
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    /// `YYYY-MM-DD`. One-off routines are active exactly on this date;
    /// recurring routines have no occurrence before it.
    pub created_date: String,
    #[serde(default)]
    pub completed_dates: CompletionMap,
}

impl Routine {
    /// Create a one-off routine active on `created_date`.
    pub fn one_off(name: impl Into<String>, created_date: impl Into<String>) -> Self {
        Routine {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            tasks: Vec::new(),
            is_recurring: false,
            days_of_week: Vec::new(),
            date_range: None,
            created_date: created_date.into(),
            completed_dates: CompletionMap::new(),
        }
    }

    /// Create a recurring routine on the given weekdays (0 = Sunday).
    pub fn recurring(
        name: impl Into<String>,
        created_date: impl Into<String>,
        days_of_week: Vec<u8>,
    ) -> Self {
        Routine {
            is_recurring: true,
            days_of_week,
            ..Routine::one_off(name, created_date)
        }
    }

    /// Bound a recurring routine to `[start, end]` inclusive.
    pub fn with_date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.date_range = Some(DateRange {
            start: start.into(),
            end: end.into(),
        });
        self
    }

    /// Append a task, keeping display order.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Look up a task by id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Return a copy with one task's completion flag set for one date.
    ///
    /// Clearing a flag writes `false` rather than removing the entry; the
    /// completion map accretes and is never pruned here.
    pub fn with_task_completion(&self, iso_date: &str, task_id: &str, done: bool) -> Routine {
        let mut updated = self.clone();
        updated
            .completed_dates
            .entry(iso_date.to_string())
            .or_default()
            .insert(task_id.to_string(), done);
        updated
    }
}
