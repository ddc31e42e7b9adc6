//! Owned task list with save-on-write persistence.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

use super::codec::{self, CodecError};
use crate::task::{
    domain::{Task, TaskId, TaskText},
    ports::{KeyValueStore, KeyValueStoreError},
};

/// Errors raised while writing the task list to its slot.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// The key-value store rejected the write.
    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),
    /// The task list could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Authoritative task list mirrored into one key-value slot.
///
/// Every successful mutation writes the full list back to the slot. A
/// failed write is logged and leaves the in-memory list as mutated; the next
/// successful write reconciles the slot.
pub struct TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    storage_key: String,
    tasks: Vec<Task>,
    last_issued: Option<TaskId>,
}

impl<S, C> TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Loads the task list stored under `storage_key`.
    ///
    /// A missing, unreadable or malformed slot yields an empty store.
    #[must_use]
    pub fn load(storage: Arc<S>, clock: Arc<C>, storage_key: impl Into<String>) -> Self {
        let key = storage_key.into();
        let tasks = read_slot(&*storage, &key);
        let last_issued = tasks.iter().map(Task::id).max();
        debug!(storage_key = %key, count = tasks.len(), "task list loaded");
        Self {
            storage,
            clock,
            storage_key: key,
            tasks,
            last_issued,
        }
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the slot key the list is persisted under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns the clock used to stamp new tasks.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Appends a new task and persists the list.
    ///
    /// Returns `None` without touching the list when `text` is empty or
    /// whitespace-only. The stored text is trimmed.
    pub fn add(&mut self, text: &str, deadline: Option<DateTime<Utc>>) -> Option<Task> {
        let Ok(task_text) = TaskText::new(text) else {
            debug!("ignoring task with blank text");
            return None;
        };
        let Some(id) = self.next_id() else {
            warn!(storage_key = %self.storage_key, "no unused task identifier left");
            return None;
        };
        let task = Task::new(id, task_text, deadline.map(codec::truncate_to_millis));
        self.tasks.push(task.clone());
        debug!(task_id = %id, "task added");
        self.persist();
        Some(task)
    }

    /// Flips the completion flag of the task with `id` and persists the list.
    ///
    /// Returns `None` and writes nothing when no task has that identifier.
    pub fn toggle(&mut self, id: TaskId) -> Option<&Task> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            debug!(task_id = %id, "toggle ignored for unknown task");
            return None;
        };
        task.toggle_completed();
        debug!(task_id = %id, completed = task.is_completed(), "task toggled");
        self.persist();
        self.find(id)
    }

    /// Removes the task with `id` and persists the list.
    ///
    /// Returns `None` and writes nothing when no task has that identifier.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            debug!(task_id = %id, "delete ignored for unknown task");
            return None;
        };
        let removed = self.tasks.remove(index);
        debug!(task_id = %id, "task deleted");
        self.persist();
        Some(removed)
    }

    /// Writes the full task list to its slot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when encoding or the slot write fails.
    pub fn save(&self) -> TaskStoreResult<()> {
        let payload = codec::encode_tasks(&self.tasks)?;
        self.storage.set(&self.storage_key, &payload)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(err) = self.save() {
            warn!(
                storage_key = %self.storage_key,
                error = %err,
                "failed to persist task list, keeping in-memory state"
            );
        }
    }

    /// Issues an identifier from the clock, bumped past every identifier
    /// already issued or loaded.
    ///
    /// Once the top of the range is taken, the highest unused identifier at
    /// or below the clock reading is issued instead.
    fn next_id(&mut self) -> Option<TaskId> {
        let candidate = TaskId::from_instant(self.clock.utc());
        let id = match self.last_issued {
            Some(last) if candidate <= last => last
                .successor()
                .or_else(|| self.highest_free_id(candidate))?,
            _ => candidate,
        };
        self.last_issued = self.last_issued.max(Some(id));
        Some(id)
    }

    fn highest_free_id(&self, ceiling: TaskId) -> Option<TaskId> {
        (i64::MIN..=ceiling.value())
            .rev()
            .map(TaskId::new)
            .find(|id| self.find(*id).is_none())
    }
}

fn read_slot(storage: &impl KeyValueStore, key: &str) -> Vec<Task> {
    match storage.get(key) {
        Ok(Some(payload)) => codec::decode_tasks(&payload).unwrap_or_else(|err| {
            warn!(storage_key = %key, error = %err, "discarding malformed task list");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!(storage_key = %key, error = %err, "task list slot unreadable, starting empty");
            Vec::new()
        }
    }
}
