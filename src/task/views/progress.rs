//! Aggregate completion statistics.

use crate::task::domain::Task;

/// Completion statistics over the whole task list.
///
/// Always computed from every task, independent of any day filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStats {
    total: usize,
    completed_count: usize,
    percent: f64,
}

impl ProgressStats {
    /// Computes statistics for `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed_count = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            total,
            completed_count,
            percent: percent_of(completed_count, total),
        }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed_count(&self) -> usize {
        self.completed_count
    }

    /// Returns the completed share in percent, `0.0` for an empty list.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Returns the percentage rounded to the nearest whole number.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "percent lies within 0.0..=100.0"
    )]
    pub fn rounded_percent(&self) -> u8 {
        self.percent.round().clamp(0.0, 100.0) as u8
    }

    /// Returns whether there is at least one task and all are completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.completed_count == self.total
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "progress is a display percentage over small task counts"
)]
fn percent_of(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}
