//! Occurrence resolution: is a routine active on a given date?

use chrono::NaiveDate;

use crate::dates::{parse_iso_date, to_iso_date, weekday_index};
use crate::routine::Routine;

/// Decide whether `routine` is scheduled on `date`.
///
/// Resolution order:
/// 1. `created_date` floor: nothing is active before the routine existed.
/// 2. One-off routines are active exactly on `created_date`.
/// 3. Recurring routines must match the weekday set, then the optional
///    inclusive `date_range` bound.
///
/// Malformed dates in the document fail closed: the routine is reported
/// inactive and a data-integrity warning is logged, so one corrupt record
/// cannot take down calendar rendering.
pub fn is_active_on(routine: &Routine, date: NaiveDate) -> bool {
    let Some(created) = parse_iso_date(&routine.created_date) else {
        log::warn!(
            "routine {}: unparseable createdDate {:?}, treating as inactive",
            routine.id,
            routine.created_date
        );
        return false;
    };

    if date < created {
        return false;
    }

    if !routine.is_recurring {
        return to_iso_date(date) == routine.created_date;
    }

    // Weekday values outside 0..=6 can never match and are ignored.
    if !routine.days_of_week.contains(&weekday_index(date)) {
        return false;
    }

    match &routine.date_range {
        None => true,
        Some(range) => match (parse_iso_date(&range.start), parse_iso_date(&range.end)) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => {
                log::warn!(
                    "routine {}: unparseable dateRange {:?}..{:?}, treating as inactive",
                    routine.id,
                    range.start,
                    range.end
                );
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::Routine;

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    #[test]
    fn one_off_is_active_only_on_its_created_date() {
        let routine = Routine::one_off("Dentist prep", "2024-03-10");
        assert!(is_active_on(&routine, date("2024-03-10")));
        assert!(!is_active_on(&routine, date("2024-03-09")));
        assert!(!is_active_on(&routine, date("2024-03-11")));
        assert!(!is_active_on(&routine, date("2023-03-10")));
    }

    #[test]
    fn recurring_matches_weekday_set_inside_range() {
        // Mondays and Wednesdays through March 2024.
        let routine = Routine::recurring("Gym", "2024-03-01", vec![1, 3])
            .with_date_range("2024-03-01", "2024-03-31");

        assert!(is_active_on(&routine, date("2024-03-04"))); // Mon
        assert!(is_active_on(&routine, date("2024-03-06"))); // Wed
        assert!(is_active_on(&routine, date("2024-03-27"))); // Wed
        assert!(!is_active_on(&routine, date("2024-03-05"))); // Tue
        assert!(!is_active_on(&routine, date("2024-02-26"))); // Mon before range
        assert!(!is_active_on(&routine, date("2024-04-01"))); // Mon after range
    }

    #[test]
    fn created_date_floor_overrides_recurrence() {
        let routine = Routine::recurring("Standup notes", "2024-03-15", vec![1]);
        assert!(!is_active_on(&routine, date("2024-03-11"))); // Monday before creation
        assert!(is_active_on(&routine, date("2024-03-18"))); // next Monday
    }

    #[test]
    fn created_date_floor_precedes_range_check() {
        // Range lies entirely before creation; the floor short-circuits.
        let routine = Routine::recurring("Old habit", "2024-03-15", vec![1])
            .with_date_range("2024-02-01", "2024-02-29");
        assert!(!is_active_on(&routine, date("2024-02-05")));
        assert!(!is_active_on(&routine, date("2024-03-18")));
    }

    #[test]
    fn empty_weekday_set_never_recurs() {
        let routine = Routine::recurring("Defensive case", "2024-03-01", vec![]);
        assert!(!is_active_on(&routine, date("2024-03-04")));
        assert!(!is_active_on(&routine, date("2024-03-01")));
    }

    #[test]
    fn out_of_range_weekday_values_are_ignored() {
        let routine = Routine::recurring("Corrupt days", "2024-03-01", vec![7, 42]);
        for day in 4..=10 {
            let iso = format!("2024-03-{day:02}");
            assert!(!is_active_on(&routine, date(&iso)));
        }
    }

    #[test]
    fn malformed_dates_fail_closed() {
        let routine = Routine::one_off("Bad record", "03/10/2024");
        assert!(!is_active_on(&routine, date("2024-03-10")));

        let routine = Routine::recurring("Bad range", "2024-03-01", vec![1])
            .with_date_range("2024-03-01", "garbage");
        assert!(!is_active_on(&routine, date("2024-03-04")));
    }
}
