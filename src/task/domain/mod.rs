//! Domain model for the to-do list.
//!
//! A [`Task`] is the only entity. Calendar types map deadline instants onto
//! date-only days so that filtering, highlighting and overdue checks agree
//! on what "the same day" means.

mod calendar;
mod error;
mod ids;
mod task;

pub use calendar::{CalendarDay, CalendarZone};
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskText};
pub use task::{PersistedTaskData, Task};
