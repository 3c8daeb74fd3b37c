//! Day status classification for a single routine occurrence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::parse_iso_date;
use crate::routine::Routine;
use crate::tracking::completion::completion_state;

/// Status of a routine occurrence on a given day.
///
/// Future days carry no status at all (`classify` returns `None`); the UI
/// must not imply success or failure for days not yet lived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    /// Every task was completed.
    Completed,
    /// Some but not all tasks completed, and the day is today.
    InProgress,
    /// A past day that was not fully completed.
    Failed,
}

/// Classify an active occurrence of `routine` on `iso_date` relative to
/// `today`.
///
/// Callers must have already confirmed the routine is active on that date
/// via [`crate::tracking::is_active_on`]; classifying an inactive occurrence
/// is meaningless. An unparseable `iso_date` yields `None`.
pub fn classify(routine: &Routine, iso_date: &str, today: NaiveDate) -> Option<DayStatus> {
    let target = parse_iso_date(iso_date)?;

    if target > today {
        return None;
    }

    let agg = completion_state(routine, iso_date);

    if target < today {
        return Some(if agg.is_fully_completed {
            DayStatus::Completed
        } else {
            DayStatus::Failed
        });
    }

    if agg.is_fully_completed {
        Some(DayStatus::Completed)
    } else if agg.has_any_completion {
        Some(DayStatus::InProgress)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::{Routine, Task};

    fn two_task_routine() -> (Routine, Vec<String>) {
        let t1 = Task::new("Plan");
        let t2 = Task::new("Review");
        let ids = vec![t1.id.clone(), t2.id.clone()];
        let routine = Routine::one_off("Daily close", "2024-03-10")
            .with_task(t1)
            .with_task(t2);
        (routine, ids)
    }

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    #[test]
    fn fully_completed_past_day_is_completed() {
        let (routine, ids) = two_task_routine();
        let routine = routine
            .with_task_completion("2024-03-10", &ids[0], true)
            .with_task_completion("2024-03-10", &ids[1], true);

        assert_eq!(
            classify(&routine, "2024-03-10", date("2024-03-12")),
            Some(DayStatus::Completed)
        );
    }

    #[test]
    fn partial_today_is_in_progress_then_failed_once_past() {
        let (routine, ids) = two_task_routine();
        let routine = routine.with_task_completion("2024-03-10", &ids[0], true);

        assert_eq!(
            classify(&routine, "2024-03-10", date("2024-03-10")),
            Some(DayStatus::InProgress)
        );
        assert_eq!(
            classify(&routine, "2024-03-10", date("2024-03-12")),
            Some(DayStatus::Failed)
        );
    }

    #[test]
    fn untouched_today_has_no_status() {
        let (routine, _) = two_task_routine();
        assert_eq!(classify(&routine, "2024-03-10", date("2024-03-10")), None);
    }

    #[test]
    fn future_days_are_never_marked() {
        let (routine, ids) = two_task_routine();
        let routine = routine
            .with_task_completion("2024-03-10", &ids[0], true)
            .with_task_completion("2024-03-10", &ids[1], true);

        assert_eq!(classify(&routine, "2024-03-10", date("2024-03-09")), None);
    }

    #[test]
    fn empty_task_routine_never_classifies_completed() {
        let routine =
            Routine::one_off("Empty", "2024-03-10").with_task_completion("2024-03-10", "x", true);

        assert_eq!(
            classify(&routine, "2024-03-10", date("2024-03-12")),
            Some(DayStatus::Failed)
        );
        assert_eq!(classify(&routine, "2024-03-10", date("2024-03-10")), None);
    }

    #[test]
    fn unparseable_target_yields_none() {
        let (routine, _) = two_task_routine();
        assert_eq!(classify(&routine, "garbage", date("2024-03-10")), None);
    }

    #[test]
    fn status_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&DayStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::to_string(&DayStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }
}
