//! Task aggregate and its persisted representation.

use super::{CalendarDay, CalendarZone, TaskId, TaskText};
use chrono::{DateTime, Utc};

/// A single to-do item.
///
/// Only the completion flag is mutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    completed: bool,
    deadline: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task text.
    pub text: TaskText,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted deadline, if any.
    pub deadline: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new, incomplete task.
    #[must_use]
    pub const fn new(id: TaskId, text: TaskText, deadline: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            text,
            completed: false,
            deadline,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            completed: data.completed,
            deadline: data.deadline,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the deadline instant, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the calendar day of the deadline in `zone`, if any.
    #[must_use]
    pub fn deadline_day(&self, zone: CalendarZone) -> Option<CalendarDay> {
        self.deadline.map(|deadline| zone.day_of(deadline))
    }

    /// Flips the completion flag.
    pub const fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
