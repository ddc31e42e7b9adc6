//! Pure views derived from a task list snapshot.
//!
//! Nothing here holds state: every function recomputes from the task slice,
//! the selected filter day, today's date and the calendar zone. Callers
//! decide when to recompute, typically after every store mutation.

mod board;
mod filter;
mod highlight;
mod progress;

pub use board::BoardView;
pub use filter::{VisibleTask, compare_by_deadline, is_overdue, matches_filter, visible_tasks};
pub use highlight::highlighted_days;
pub use progress::ProgressStats;
