//! Calendar marker derivation for the heat-map overview.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::{parse_iso_date, to_iso_date};
use crate::routine::Routine;
use crate::tracking::occurrence::is_active_on;
use crate::tracking::status::{classify, DayStatus};

/// Default marker window: 30 days back and forward from the anchor.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// One calendar-day annotation for heat-map rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    pub marked: bool,
    pub status: DayStatus,
}

/// Derives the date -> marker map over a bounded window around the anchor.
#[derive(Debug, Clone)]
pub struct MarkerBuilder {
    /// Days enumerated on each side of the anchor for recurring routines.
    pub window_days: i64,
}

impl MarkerBuilder {
    pub fn new() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_window(window_days: i64) -> Self {
        Self { window_days }
    }

    /// Build markers for every routine over `[today - window, today + window]`.
    ///
    /// One-off routines contribute their single `created_date` regardless of
    /// the window. Future dates classify to no status and are therefore
    /// never marked. When several routines land on the same day the last
    /// routine in the slice wins; there is no severity ranking between
    /// conflicting statuses.
    pub fn build(&self, routines: &[Routine], today: NaiveDate) -> HashMap<String, DayMarker> {
        let mut markers = HashMap::new();

        for routine in routines {
            if routine.is_recurring {
                let mut date = today - Duration::days(self.window_days);
                let end = today + Duration::days(self.window_days);
                while date <= end {
                    if is_active_on(routine, date) {
                        let iso = to_iso_date(date);
                        if let Some(status) = classify(routine, &iso, today) {
                            markers.insert(
                                iso,
                                DayMarker {
                                    marked: true,
                                    status,
                                },
                            );
                        }
                    }
                    date += Duration::days(1);
                }
            } else if parse_iso_date(&routine.created_date).is_some() {
                // A parseable created_date is by definition the one date a
                // one-off routine is active on.
                if let Some(status) = classify(routine, &routine.created_date, today) {
                    markers.insert(
                        routine.created_date.clone(),
                        DayMarker {
                            marked: true,
                            status,
                        },
                    );
                }
            }
        }

        markers
    }
}

impl Default for MarkerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
