//! Calendar math helpers shared by the tracking engine.
//!
//! Routine documents store dates as `YYYY-MM-DD` strings; everything in the
//! engine resolves to [`chrono::NaiveDate`], which is date-only and ordered,
//! so "strip the time of day before comparing" happens once at the host
//! boundary and never again inside the engine.

use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Format string for routine document dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string.
///
/// Returns `None` for anything that does not parse as a real calendar date.
/// Callers treat `None` as "fail closed": the routine or entry carrying the
/// bad date is excluded rather than crashing a screen.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// Day-of-week index with 0 = Sunday ... 6 = Saturday.
///
/// Matches the `days_of_week` convention in routine documents.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Strip the time of day from a wall-clock instant.
///
/// Hosts hold `DateTime<Local>` "now" anchors; the engine only ever sees the
/// local calendar date.
pub fn date_only(instant: &DateTime<Local>) -> NaiveDate {
    instant.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(to_iso_date(date), "2024-03-10");
        assert_eq!(parse_iso_date("2024-03-10"), Some(date));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2024-13-01"), None);
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date("03/10/2024"), None);
        assert_eq!(parse_iso_date("not-a-date"), None);
    }

    #[test]
    fn weekday_index_is_sunday_based() {
        // 2024-03-10 was a Sunday.
        assert_eq!(
            weekday_index(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
            0
        );
        // 2024-03-11 was a Monday.
        assert_eq!(
            weekday_index(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()),
            1
        );
        // 2024-03-16 was a Saturday.
        assert_eq!(
            weekday_index(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()),
            6
        );
    }
}
