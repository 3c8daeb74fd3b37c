//! JSON snapshot of routine documents.
//!
//! The remote store syncs routines as JSON documents; the CLI host keeps
//! its local copy as one JSON file. Writes go through a temp file and
//! rename so a crash mid-save cannot leave a half-written snapshot.
//! Edits are last-writer-wins, matching the remote store's semantics.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};
use crate::routine::Routine;

/// The full set of routine documents known to this host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineSnapshot {
    #[serde(default)]
    pub routines: Vec<Routine>,
}

impl RoutineSnapshot {
    /// Load a snapshot, treating a missing file as an empty snapshot.
    pub fn load(path: &Path) -> Result<RoutineSnapshot> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RoutineSnapshot::default());
            }
            Err(err) => {
                return Err(SnapshotError::ReadFailed {
                    path: path.to_path_buf(),
                    source: err,
                }
                .into());
            }
        };

        let snapshot = serde_json::from_str(&raw).map_err(|err| SnapshotError::ParseFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(snapshot)
    }

    /// Persist the snapshot atomically (write temp, then rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        let tmp = tmp_path(path);
        std::fs::write(&tmp, raw).map_err(|err| SnapshotError::WriteFailed {
            path: tmp.clone(),
            source: err,
        })?;
        std::fs::rename(&tmp, path).map_err(|err| SnapshotError::WriteFailed {
            path: path.to_path_buf(),
            source: err,
        })?;
        Ok(())
    }

    /// Look up a routine by id.
    pub fn routine(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    /// Add a routine document.
    pub fn insert(&mut self, routine: Routine) {
        self.routines.push(routine);
    }

    /// Remove a routine document by id.
    pub fn remove(&mut self, id: &str) -> Result<Routine> {
        let index = self
            .routines
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| SnapshotError::RoutineNotFound(id.to_string()))?;
        Ok(self.routines.remove(index))
    }

    /// Replace one routine document with an updated copy.
    pub fn replace(&mut self, routine: Routine) -> Result<()> {
        let slot = self
            .routines
            .iter_mut()
            .find(|r| r.id == routine.id)
            .ok_or_else(|| SnapshotError::RoutineNotFound(routine.id.clone()))?;
        *slot = routine;
        Ok(())
    }

    /// Set a task's completion flag for a date and return the new state.
    ///
    /// Goes through [`Routine::with_task_completion`], so the stored
    /// document is replaced wholesale rather than edited in place.
    pub fn set_task_completion(
        &mut self,
        routine_id: &str,
        task_id: &str,
        iso_date: &str,
        done: bool,
    ) -> Result<()> {
        let routine = self
            .routine(routine_id)
            .ok_or_else(|| SnapshotError::RoutineNotFound(routine_id.to_string()))?;
        if routine.task(task_id).is_none() {
            return Err(SnapshotError::TaskNotFound {
                routine_id: routine_id.to_string(),
                task_id: task_id.to_string(),
            }
            .into());
        }
        let updated = routine.with_task_completion(iso_date, task_id, done);
        self.replace(updated)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
