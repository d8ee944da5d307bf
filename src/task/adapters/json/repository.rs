//! Durable JSON-blob repository over a capability-scoped directory.

use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use std::sync::RwLock;

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Name of the single blob holding the whole task collection.
const TASKS_BLOB: &str = "tasks.json";

#[derive(Debug, Default)]
struct JsonState {
    tasks: Vec<Task>,
    last_save_error: Option<String>,
}

/// Task repository backed by one JSON blob in a sandboxed directory.
///
/// The canonical collection lives in memory; the blob is read once at
/// [`Self::open`] time and rewritten wholesale after every mutation. Saves
/// are fire-and-forget: a failed write never fails the mutation, because
/// the next mutation rewrites the full collection anyway. The most recent
/// save failure stays observable through [`Self::last_save_error`], and
/// [`Self::flush`] forces a synchronous write for session boundaries.
#[derive(Debug)]
pub struct JsonTaskRepository {
    dir: Dir,
    state: RwLock<JsonState>,
}

impl JsonTaskRepository {
    /// Opens the repository, loading the blob or falling back to `seed`.
    ///
    /// An absent or corrupt blob is not an error: startup proceeds on the
    /// seed dataset and the blob is rewritten at the next mutation.
    #[must_use]
    pub fn open(dir: Dir, seed: Vec<Task>) -> Self {
        let tasks = dir
            .read_to_string(TASKS_BLOB)
            .ok()
            .and_then(|raw| serde_json::from_str::<Vec<Task>>(&raw).ok())
            .unwrap_or(seed);
        Self {
            dir,
            state: RwLock::new(JsonState {
                tasks,
                last_save_error: None,
            }),
        }
    }

    /// Returns the most recent save failure, if the last write did not
    /// reach the blob.
    #[must_use]
    pub fn last_save_error(&self) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.last_save_error.clone())
    }

    /// Forces a synchronous write of the collection to the blob.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when serialization or
    /// the write fails.
    pub fn flush(&self) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let raw = serde_json::to_string_pretty(&state.tasks)
            .map_err(TaskRepositoryError::persistence)?;
        self.dir
            .write(TASKS_BLOB, raw)
            .map_err(TaskRepositoryError::persistence)?;
        state.last_save_error = None;
        Ok(())
    }

    /// Serializes and writes the collection, recording rather than
    /// propagating failures.
    fn save_best_effort(&self, state: &mut JsonState) {
        let outcome = serde_json::to_string_pretty(&state.tasks)
            .map_err(|err| err.to_string())
            .and_then(|raw| {
                self.dir
                    .write(TASKS_BLOB, raw)
                    .map_err(|err| err.to_string())
            });
        state.last_save_error = outcome.err();
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for JsonTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.push(task.clone());
        self.save_best_effort(&mut state);
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        self.save_best_effort(&mut state);
        Ok(())
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let position = state
            .tasks
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        let removed = state.tasks.remove(position);
        self.save_best_effort(&mut state);
        Ok(removed)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .tasks
            .iter()
            .find(|existing| existing.id() == id)
            .cloned())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.clone())
    }
}
