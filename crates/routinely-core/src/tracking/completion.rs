//! Per-routine, per-day completion aggregation.

use serde::{Deserialize, Serialize};

use crate::routine::Routine;

/// Aggregate completion of a routine's tasks on one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionState {
    pub completed_count: usize,
    pub total_count: usize,
    pub is_fully_completed: bool,
    pub has_any_completion: bool,
}

/// Aggregate the completion flags recorded for `iso_date`.
///
/// Reads the completion map literally: entries for dates the routine is not
/// active on are still counted when asked about that date, and a missing
/// entry means "not completed". A routine with zero tasks is never fully
/// completed, so an empty routine cannot vacuously satisfy a day.
pub fn completion_state(routine: &Routine, iso_date: &str) -> CompletionState {
    let total_count = routine.tasks.len();
    let by_task = routine.completed_dates.get(iso_date);

    let completed_count = routine
        .tasks
        .iter()
        .filter(|task| {
            by_task
                .and_then(|flags| flags.get(&task.id))
                .copied()
                .unwrap_or(false)
        })
        .count();

    CompletionState {
        completed_count,
        total_count,
        is_fully_completed: total_count > 0 && completed_count == total_count,
        has_any_completion: completed_count > 0,
    }
}
