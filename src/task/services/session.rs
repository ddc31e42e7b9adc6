//! Presentation boundary: user intents in, board views out.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::debug;

use super::{TaskForm, TaskStore};
use crate::config::AlmanacConfig;
use crate::task::{
    domain::{CalendarDay, CalendarZone, Task, TaskDomainError, TaskId},
    ports::KeyValueStore,
    views::BoardView,
};

/// A single user's to-do board.
///
/// Owns the [`TaskStore`], the add-task [`TaskForm`] and the selected filter
/// day. The filter starts on today.
pub struct TodoSession<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    store: TaskStore<S, C>,
    form: TaskForm,
    zone: CalendarZone,
    filter_day: Option<CalendarDay>,
}

impl<S, C> TodoSession<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a session over an already loaded store.
    #[must_use]
    pub fn new(store: TaskStore<S, C>, zone: CalendarZone) -> Self {
        let today = zone.today(store.clock());
        let form = TaskForm::new(store.clock());
        Self {
            store,
            form,
            zone,
            filter_day: Some(today),
        }
    }

    /// Loads the configured slot and opens a session on it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCalendarOffset`] when the configured
    /// offset is out of range.
    pub fn open(
        storage: Arc<S>,
        clock: Arc<C>,
        config: &AlmanacConfig,
    ) -> Result<Self, TaskDomainError> {
        let zone = config.calendar_zone()?;
        let store = TaskStore::load(storage, clock, config.storage_key.clone());
        Ok(Self::new(store, zone))
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore<S, C> {
        &self.store
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Returns the calendar zone.
    #[must_use]
    pub const fn zone(&self) -> CalendarZone {
        self.zone
    }

    /// Returns the current calendar day.
    #[must_use]
    pub fn today(&self) -> CalendarDay {
        self.zone.today(self.store.clock())
    }

    /// Returns the selected filter day, `None` when showing all tasks.
    #[must_use]
    pub const fn filter_day(&self) -> Option<CalendarDay> {
        self.filter_day
    }

    /// Adds a task with an explicit deadline.
    pub fn add_task(&mut self, text: &str, deadline: Option<DateTime<Utc>>) -> Option<Task> {
        self.store.add(text, deadline)
    }

    /// Toggles a task's completion flag.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<&Task> {
        self.store.toggle(id)
    }

    /// Deletes a task.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        self.store.delete(id)
    }

    /// Restricts the board to `day`, or shows everything for `None`.
    pub fn select_filter_day(&mut self, day: Option<CalendarDay>) {
        debug!(filter_day = ?day.map(|selected| selected.to_string()), "filter day selected");
        self.filter_day = day;
    }

    /// Clears the filter day.
    pub fn show_all(&mut self) {
        self.select_filter_day(None);
    }

    /// Returns the add-task form.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the add-task form for editing.
    pub const fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Submits the add-task form.
    pub fn submit_form(&mut self) -> Option<Task> {
        self.form.submit(&mut self.store)
    }

    /// Derives the board for the current list, filter and day.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::derive(self.store.tasks(), self.filter_day, self.today(), self.zone)
    }
}
