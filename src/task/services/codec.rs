//! Persisted task list layout.
//!
//! The slot holds a JSON array of records in insertion order:
//!
//! ```json
//! [
//!   {"id": 1760000000000, "text": "Buy milk", "completed": false,
//!    "deadline": "2026-10-19T09:00:00.000Z"},
//!   {"id": 1760000000001, "text": "Call home", "completed": true,
//!    "deadline": null}
//! ]
//! ```
//!
//! Deadlines are written as ISO-8601 instants with millisecond precision in
//! UTC. Any RFC 3339 instant is accepted on read and truncated to
//! milliseconds, and a missing `deadline` field reads as `null`.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{PersistedTaskData, Task, TaskDomainError, TaskId, TaskText};

/// Errors raised while encoding or decoding a persisted task list.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not a well-formed task list.
    #[error("malformed task list: {0}")]
    Json(#[from] serde_json::Error),

    /// A deadline is not an RFC 3339 instant.
    #[error("task {id} has an invalid deadline '{value}'")]
    InvalidDeadline {
        /// Identifier of the offending record.
        id: TaskId,
        /// Raw deadline value.
        value: String,
    },

    /// Two records share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateId(TaskId),

    /// A record violates a domain invariant.
    #[error("task {id} is invalid: {source}")]
    Domain {
        /// Identifier of the offending record.
        id: TaskId,
        /// Underlying validation failure.
        #[source]
        source: TaskDomainError,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct TaskRecord {
    id: i64,
    text: String,
    completed: bool,
    #[serde(default)]
    deadline: Option<String>,
}

impl TaskRecord {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            text: task.text().as_str().to_owned(),
            completed: task.is_completed(),
            deadline: task.deadline().map(format_deadline),
        }
    }

    fn into_task(self) -> Result<Task, CodecError> {
        let id = TaskId::new(self.id);
        let text = TaskText::new(&self.text).map_err(|source| CodecError::Domain { id, source })?;
        let deadline = self
            .deadline
            .map(|value| parse_deadline(id, value))
            .transpose()?;
        Ok(Task::from_persisted(PersistedTaskData {
            id,
            text,
            completed: self.completed,
            deadline,
        }))
    }
}

fn format_deadline(deadline: DateTime<Utc>) -> String {
    deadline.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_deadline(id: TaskId, value: String) -> Result<DateTime<Utc>, CodecError> {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(parsed) => Ok(truncate_to_millis(parsed.with_timezone(&Utc))),
        Err(_) => Err(CodecError::InvalidDeadline { id, value }),
    }
}

/// Drops sub-millisecond precision, which the persisted layout cannot hold.
#[must_use]
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(3)
}

/// Encodes the full task list.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if serialisation fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, CodecError> {
    let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from_task).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decodes a full task list.
///
/// The payload is accepted or rejected as a whole; no partial list is ever
/// returned.
///
/// # Errors
///
/// Returns [`CodecError`] when the payload is malformed, a record fails
/// validation, or two records share an identifier.
pub fn decode_tasks(payload: &str) -> Result<Vec<Task>, CodecError> {
    let records: Vec<TaskRecord> = serde_json::from_str(payload)?;
    let mut seen = HashSet::with_capacity(records.len());
    let mut tasks = Vec::with_capacity(records.len());
    for record in records {
        let task = record.into_task()?;
        if !seen.insert(task.id()) {
            return Err(CodecError::DuplicateId(task.id()));
        }
        tasks.push(task);
    }
    Ok(tasks)
}
