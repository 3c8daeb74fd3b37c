//! # Routinely Core Library
//!
//! This library provides the core business logic for Routinely, a routines
//! and journaling companion. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with GUI hosts
//! being thin layers over the same core library.
//!
//! ## Architecture
//!
//! - **Tracking Engine**: Pure, synchronous derivations over routine
//!   snapshots -- occurrence resolution, completion aggregation, day status,
//!   calendar markers, and streaks. "Today" is always an injected parameter,
//!   never read from the clock inside the engine.
//! - **Storage**: JSON snapshot of routine documents and TOML-based
//!   configuration. Stands in for the remote document store when running
//!   locally; the engine itself never touches it.
//!
//! ## Key Components
//!
//! - [`Routine`] / [`Task`]: Routine document value objects
//! - [`is_active_on`]: Occurrence resolver
//! - [`completion_state`] / [`classify`]: Per-day completion and status
//! - [`MarkerBuilder`]: Calendar heat-map marker derivation
//! - [`compute_streak`]: Consecutive-completion streak
//! - [`RoutineSnapshot`] / [`Config`]: Host-side persistence

pub mod dates;
pub mod error;
pub mod routine;
pub mod storage;
pub mod tracking;

pub use error::{ConfigError, CoreError, SnapshotError};
pub use routine::{CompletionMap, DateRange, Routine, Task, TimeRange};
pub use storage::{Config, RoutineSnapshot};
pub use tracking::{
    classify, completion_state, compute_streak, is_active_on, CompletionState, DayMarker,
    DayStatus, MarkerBuilder, DEFAULT_WINDOW_DAYS,
};
