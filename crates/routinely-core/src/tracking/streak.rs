//! Consecutive-completion streak derivation.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dates::{parse_iso_date, to_iso_date};
use crate::routine::Routine;
use crate::tracking::completion::completion_state;
use crate::tracking::occurrence::is_active_on;

/// Count consecutive fully-completed days walking backward from `today`.
///
/// Only dates that appear as keys in some routine's completion map are
/// visited; a day nobody ever touched is invisible to the walk and cannot
/// break a streak. The walk stops at the first visited past day on which
/// some active routine was left incomplete. An incomplete *today* is
/// skipped without breaking, since the day is still in progress. A visited
/// day with no active routines counts as complete.
pub fn compute_streak(routines: &[Routine], today: NaiveDate) -> u32 {
    let mut touched: BTreeSet<NaiveDate> = BTreeSet::new();
    for routine in routines {
        for key in routine.completed_dates.keys() {
            match parse_iso_date(key) {
                Some(date) => {
                    touched.insert(date);
                }
                None => {
                    log::warn!(
                        "routine {}: skipping unparseable completedDates key {:?}",
                        routine.id,
                        key
                    );
                }
            }
        }
    }

    let mut streak = 0;
    for date in touched.iter().rev() {
        let iso = to_iso_date(*date);
        let all_complete = routines
            .iter()
            .filter(|r| is_active_on(r, *date))
            .all(|r| completion_state(r, &iso).is_fully_completed);

        if all_complete {
            streak += 1;
        } else if *date == today {
            continue;
        } else {
            break;
        }
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::{Routine, Task};

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    fn daily_routine(created: &str) -> (Routine, String) {
        let task = Task::new("Only task");
        let id = task.id.clone();
        let routine =
            Routine::recurring("Daily", created, vec![0, 1, 2, 3, 4, 5, 6]).with_task(task);
        (routine, id)
    }

    #[test]
    fn counts_consecutive_completed_days() {
        let (routine, id) = daily_routine("2024-03-01");
        let routine = routine
            .with_task_completion("2024-03-08", &id, true)
            .with_task_completion("2024-03-09", &id, true)
            .with_task_completion("2024-03-10", &id, true);

        assert_eq!(compute_streak(&[routine], date("2024-03-10")), 3);
    }

    #[test]
    fn incomplete_today_does_not_break_the_streak() {
        let (routine, id) = daily_routine("2024-03-01");
        let routine = routine
            .with_task_completion("2024-03-08", &id, true)
            .with_task_completion("2024-03-09", &id, true)
            .with_task_completion("2024-03-10", &id, false);

        assert_eq!(compute_streak(&[routine], date("2024-03-10")), 2);
    }

    #[test]
    fn incomplete_past_day_stops_the_scan() {
        let (routine, id) = daily_routine("2024-03-01");
        let routine = routine
            .with_task_completion("2024-03-08", &id, true)
            .with_task_completion("2024-03-09", &id, false)
            .with_task_completion("2024-03-10", &id, true);

        // The break at 03-09 hides the completed 03-08.
        assert_eq!(compute_streak(&[routine], date("2024-03-11")), 1);
    }

    #[test]
    fn break_directly_before_today_zeroes_the_streak() {
        let (routine, id) = daily_routine("2024-03-01");
        let routine = routine
            .with_task_completion("2024-03-08", &id, true)
            .with_task_completion("2024-03-09", &id, false);

        assert_eq!(compute_streak(&[routine], date("2024-03-11")), 0);
    }

    #[test]
    fn untouched_gap_days_are_invisible_to_the_walk() {
        let (routine, id) = daily_routine("2024-03-01");
        // 03-09 was active but never touched; only touched days are visited.
        let routine = routine
            .with_task_completion("2024-03-08", &id, true)
            .with_task_completion("2024-03-10", &id, true);

        assert_eq!(compute_streak(&[routine], date("2024-03-10")), 2);
    }

    #[test]
    fn every_active_routine_must_be_complete() {
        let (done, done_id) = daily_routine("2024-03-01");
        let done = done.with_task_completion("2024-03-09", &done_id, true);
        let (missed, _) = daily_routine("2024-03-01");

        // `missed` is active on 03-09 but has nothing completed there.
        assert_eq!(compute_streak(&[done, missed], date("2024-03-10")), 0);
    }

    #[test]
    fn day_with_no_active_routines_counts_as_complete() {
        // Orphan completion entry on a date after the one-off's single day.
        let task = Task::new("T");
        let id = task.id.clone();
        let routine = Routine::one_off("One-off", "2024-03-01")
            .with_task(task)
            .with_task_completion("2024-03-01", &id, true)
            .with_task_completion("2024-03-09", &id, true);

        // 03-09 has no active routine, so it extends; 03-01 is complete.
        // The untouched week in between is never visited.
        assert_eq!(compute_streak(&[routine], date("2024-03-10")), 2);
    }

    #[test]
    fn unparseable_completion_keys_are_skipped() {
        let (routine, id) = daily_routine("2024-03-01");
        let routine = routine
            .with_task_completion("2024-03-09", &id, true)
            .with_task_completion("not-a-date", &id, true)
            .with_task_completion("2024-03-10", &id, true);

        assert_eq!(compute_streak(&[routine], date("2024-03-10")), 2);
    }

    #[test]
    fn no_completion_history_means_zero() {
        let (routine, _) = daily_routine("2024-03-01");
        assert_eq!(compute_streak(&[routine], date("2024-03-10")), 0);
        assert_eq!(compute_streak(&[], date("2024-03-10")), 0);
    }
}
