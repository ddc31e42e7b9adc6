//! Input form state for adding tasks.

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::TaskStore;
use crate::task::{domain::Task, ports::KeyValueStore};

/// Draft text and deadline picker feeding [`TaskStore::add`].
///
/// The picker starts at the current instant and returns to it after every
/// successful submit. Clearing the picker submits a task without a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    text: String,
    deadline: Option<DateTime<Utc>>,
}

impl TaskForm {
    /// Creates an empty form with the picker set to now.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            text: String::new(),
            deadline: Some(clock.utc()),
        }
    }

    /// Returns the draft text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the draft text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the picker value.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Sets the picker to `deadline`.
    pub fn select_deadline(&mut self, deadline: DateTime<Utc>) {
        self.deadline = Some(deadline);
    }

    /// Clears the picker.
    pub fn clear_deadline(&mut self) {
        self.deadline = None;
    }

    /// Adds the drafted task to `store`.
    ///
    /// On success the draft text is cleared and the picker reset to the
    /// store clock's current instant. A blank draft is left untouched.
    pub fn submit<S, C>(&mut self, store: &mut TaskStore<S, C>) -> Option<Task>
    where
        S: KeyValueStore,
        C: Clock + Send + Sync,
    {
        let task = store.add(&self.text, self.deadline)?;
        self.text.clear();
        self.deadline = Some(store.clock().utc());
        Some(task)
    }
}
