//! Everything a task board renders, derived in one pass.

use std::collections::BTreeSet;

use super::{ProgressStats, VisibleTask, highlighted_days, visible_tasks};
use crate::task::domain::{CalendarDay, CalendarZone, Task};

/// Derived board state: visible tasks, calendar marks and progress.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView<'a> {
    filter_day: Option<CalendarDay>,
    today: CalendarDay,
    tasks: Vec<VisibleTask<'a>>,
    highlighted_days: BTreeSet<CalendarDay>,
    progress: ProgressStats,
}

impl<'a> BoardView<'a> {
    /// Derives the board for `tasks` as seen on `today`.
    #[must_use]
    pub fn derive(
        tasks: &'a [Task],
        filter_day: Option<CalendarDay>,
        today: CalendarDay,
        zone: CalendarZone,
    ) -> Self {
        Self {
            filter_day,
            today,
            tasks: visible_tasks(tasks, filter_day, today, zone),
            highlighted_days: highlighted_days(tasks, zone),
            progress: ProgressStats::from_tasks(tasks),
        }
    }

    /// Returns the active filter day, `None` when showing all tasks.
    #[must_use]
    pub const fn filter_day(&self) -> Option<CalendarDay> {
        self.filter_day
    }

    /// Returns the day the board was derived for.
    #[must_use]
    pub const fn today(&self) -> CalendarDay {
        self.today
    }

    /// Returns the visible tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[VisibleTask<'a>] {
        &self.tasks
    }

    /// Returns the days carrying an incomplete task's deadline.
    #[must_use]
    pub const fn highlighted_days(&self) -> &BTreeSet<CalendarDay> {
        &self.highlighted_days
    }

    /// Returns the completion statistics for the whole list.
    #[must_use]
    pub const fn progress(&self) -> ProgressStats {
        self.progress
    }

    /// Returns whether no task passes the current filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
