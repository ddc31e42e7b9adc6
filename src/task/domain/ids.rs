//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
///
/// Identifiers are derived from the creation instant in epoch milliseconds,
/// so they sort in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Creates a task identifier from a creation instant.
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant.timestamp_millis())
    }

    /// Returns the identifier immediately following this one, or `None` at
    /// the top of the range.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-supplied task label, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskText(String);

impl TaskText {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskText`] when the value is empty or
    /// contains only whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskText);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
