//! Calendar days carrying outstanding deadlines.

use std::collections::BTreeSet;

use crate::task::domain::{CalendarDay, CalendarZone, Task};

/// Returns the days on which at least one incomplete task is due.
///
/// Completed tasks never mark a day, whatever their deadline.
#[must_use]
pub fn highlighted_days(tasks: &[Task], zone: CalendarZone) -> BTreeSet<CalendarDay> {
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .filter_map(|task| task.deadline_day(zone))
        .collect()
}
