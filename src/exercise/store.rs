//! # Exercise Store
//!
//! Owns the ordered collection of exercises. Lookups are linear scans over
//! the stringified ids, which is fine for the handful of records the service
//! is meant to hold.
//!
//! All access goes through one `RwLock`: reads share it, mutations hold it
//! exclusively, so at most one mutator runs at a time.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::errors::{ExerciseError, ExerciseResult};
use super::id;
use super::model::{Exercise, ExerciseUpdate};

/// Store trait for exercise operations
pub trait ExerciseStore: Send + Sync {
    /// All records in current collection order
    fn list(&self) -> ExerciseResult<Vec<Exercise>>;

    /// First record whose stringified id equals `raw`
    fn get(&self, raw: &str) -> ExerciseResult<Exercise>;

    /// Append a record with a fresh id
    fn create(&self, title: String) -> ExerciseResult<Exercise>;

    /// Replace the record identified by `raw`, returning the record as it was
    /// before replacement. The stored id is always the path id.
    fn update(&self, raw: &str, changes: ExerciseUpdate) -> ExerciseResult<Exercise>;

    /// Remove the record identified by `raw`
    fn delete(&self, raw: &str) -> ExerciseResult<()>;

    /// Number of records
    fn len(&self) -> ExerciseResult<usize>;

    fn is_empty(&self) -> ExerciseResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Process-lifetime in-memory store
#[derive(Debug, Default)]
pub struct InMemoryExerciseStore {
    exercises: RwLock<Vec<Exercise>>,
}

impl InMemoryExerciseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `count` demo exercises
    pub fn with_seed(count: usize) -> Self {
        let exercises = (1..=count)
            .map(|i| Exercise::new(id::generate(), format!("Exercise {}", i)))
            .collect();
        Self::from_records(exercises)
    }

    /// Create a store holding exactly `exercises`, in order
    ///
    /// Caller is responsible for id uniqueness.
    pub fn from_records(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises: RwLock::new(exercises),
        }
    }

    fn read(&self) -> ExerciseResult<RwLockReadGuard<'_, Vec<Exercise>>> {
        self.exercises
            .read()
            .map_err(|_| ExerciseError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> ExerciseResult<RwLockWriteGuard<'_, Vec<Exercise>>> {
        self.exercises
            .write()
            .map_err(|_| ExerciseError::Internal("Lock poisoned".to_string()))
    }

    fn position(exercises: &[Exercise], raw: &str) -> Option<usize> {
        exercises.iter().position(|e| e.matches(raw))
    }
}

impl ExerciseStore for InMemoryExerciseStore {
    fn list(&self) -> ExerciseResult<Vec<Exercise>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, raw: &str) -> ExerciseResult<Exercise> {
        let exercises = self.read()?;
        Self::position(&exercises, raw)
            .map(|idx| exercises[idx].clone())
            .ok_or(ExerciseError::NotFound)
    }

    fn create(&self, title: String) -> ExerciseResult<Exercise> {
        let exercise = Exercise::new(id::generate(), title);
        let mut exercises = self.write()?;
        exercises.push(exercise.clone());
        tracing::info!(id = %exercise.id, total = exercises.len(), "exercise created");
        Ok(exercise)
    }

    fn update(&self, raw: &str, changes: ExerciseUpdate) -> ExerciseResult<Exercise> {
        // Callers over HTTP have already validated `raw`; the store checks
        // again so it never stores an id it could not parse.
        id::validate(raw)?;
        let path_id: Uuid = id::parse(raw)?;

        if let Some(body_id) = &changes.id {
            tracing::debug!(%path_id, %body_id, "ignoring id supplied in update body");
        }
        let replacement = Exercise::new(path_id, changes.title);

        let mut exercises = self.write()?;
        let idx = Self::position(&exercises, raw).ok_or(ExerciseError::NotFound)?;
        let previous = std::mem::replace(&mut exercises[idx], replacement);
        tracing::info!(id = %path_id, "exercise updated");
        Ok(previous)
    }

    fn delete(&self, raw: &str) -> ExerciseResult<()> {
        let mut exercises = self.write()?;
        let idx = Self::position(&exercises, raw).ok_or(ExerciseError::NotFound)?;
        // Last element moves into the vacated slot; order is not preserved.
        let removed = exercises.swap_remove(idx);
        tracing::info!(id = %removed.id, total = exercises.len(), "exercise deleted");
        Ok(())
    }

    fn len(&self) -> ExerciseResult<usize> {
        Ok(self.read()?.len())
    }
}
