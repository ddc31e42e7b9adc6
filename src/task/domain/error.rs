//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// The calendar day does not follow `YYYY-MM-DD` format.
    #[error("invalid calendar day '{0}', expected YYYY-MM-DD")]
    InvalidCalendarDay(String),

    /// The calendar offset lies outside the supported UTC offset range.
    #[error("calendar offset of {0} minutes is outside -1439..=1439")]
    InvalidCalendarOffset(i32),
}
