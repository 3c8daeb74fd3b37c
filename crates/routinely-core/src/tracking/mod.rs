//! Routine tracking engine
//!
//! Pure, date-driven derivations over routine snapshots: occurrence
//! resolution, per-day completion aggregation, status classification,
//! calendar markers, and the consecutive-completion streak. Every function
//! takes the routine list and an explicit anchor date and returns new data;
//! nothing here performs I/O or mutates its inputs, so the whole module is
//! referentially reproducible for a given `(routines, today)` pair.

mod completion;
mod markers;
mod occurrence;
mod status;
mod streak;

pub use completion::{completion_state, CompletionState};
pub use markers::{DayMarker, MarkerBuilder, DEFAULT_WINDOW_DAYS};
pub use occurrence::is_active_on;
pub use status::{classify, DayStatus};
pub use streak::compute_streak;
