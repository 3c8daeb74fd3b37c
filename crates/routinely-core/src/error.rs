//! Core error types for routinely-core.
//!
//! The tracking engine itself never errors on data-shape problems; it
//! degrades to conservative results instead. These types cover the storage
//! collaborator (snapshot + config), which does real I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for routinely-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Snapshot-related errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Snapshot-file errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Failed to read the snapshot file
    #[error("Failed to read snapshot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the snapshot file
    #[error("Failed to write snapshot at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content did not parse
    #[error("Failed to parse snapshot at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Referenced routine does not exist
    #[error("No routine with id {0}")]
    RoutineNotFound(String),

    /// Referenced task does not exist within the routine
    #[error("Routine {routine_id} has no task {task_id}")]
    TaskNotFound {
        routine_id: String,
        task_id: String,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
