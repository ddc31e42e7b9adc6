//! Day filtering, deadline ordering and overdue detection.

use std::cmp::Ordering;

use crate::task::domain::{CalendarDay, CalendarZone, Task};

/// A task selected for display, with its overdue flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTask<'a> {
    task: &'a Task,
    overdue: bool,
}

impl<'a> VisibleTask<'a> {
    /// Returns the underlying task.
    #[must_use]
    pub const fn task(&self) -> &'a Task {
        self.task
    }

    /// Returns whether the task is overdue.
    #[must_use]
    pub const fn is_overdue(&self) -> bool {
        self.overdue
    }
}

/// Returns whether `task` is incomplete and due on a day before `today`.
#[must_use]
pub fn is_overdue(task: &Task, today: CalendarDay, zone: CalendarZone) -> bool {
    !task.is_completed() && task.deadline_day(zone).is_some_and(|day| day < today)
}

/// Returns whether `task` passes the day filter.
///
/// Without a filter every task passes. With one, only tasks due on that day
/// pass; tasks without a deadline never do.
#[must_use]
pub fn matches_filter(task: &Task, filter: Option<CalendarDay>, zone: CalendarZone) -> bool {
    filter.is_none_or(|day| task.deadline_day(zone) == Some(day))
}

/// Orders tasks with a deadline before tasks without one, earlier deadlines
/// first.
///
/// Tasks with equal deadlines, and tasks without deadlines, compare equal so
/// a stable sort keeps their insertion order.
#[must_use]
pub fn compare_by_deadline(left: &Task, right: &Task) -> Ordering {
    match (left.deadline(), right.deadline()) {
        (Some(left_deadline), Some(right_deadline)) => left_deadline.cmp(&right_deadline),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Selects and orders the tasks to display.
#[must_use]
pub fn visible_tasks(
    tasks: &[Task],
    filter: Option<CalendarDay>,
    today: CalendarDay,
    zone: CalendarZone,
) -> Vec<VisibleTask<'_>> {
    let mut selected: Vec<&Task> = tasks
        .iter()
        .filter(|task| matches_filter(task, filter, zone))
        .collect();
    // `sort_by` is stable.
    selected.sort_by(|left, right| compare_by_deadline(left, right));
    selected
        .into_iter()
        .map(|task| VisibleTask {
            task,
            overdue: is_overdue(task, today, zone),
        })
        .collect()
}
