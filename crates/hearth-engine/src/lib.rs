//! # hearth-engine
//!
//! Read-only evaluation of household tasks: whether a task is due, whether it
//! is scheduled on a date, who is responsible for it, which completions count
//! toward the current period, and how long its completion streak is.
//!
//! Every function here is pure. Callers pass the task, its completion records,
//! its assignment overrides and a reference date (the household's local
//! calendar day) explicitly; nothing is looked up from ambient state and
//! nothing is written. Malformed input degrades to a defined result instead of
//! an error.

pub mod dates;
pub mod evaluate;
pub mod mutation;
pub mod period;
pub mod recurrence;
pub mod rotation;
pub mod streak;
mod test_support;

pub use evaluate::{evaluate_household, evaluate_task};
pub use mutation::{plan_completion, plan_uncompletion};
pub use period::{Period, completions_in_current_period};
pub use recurrence::{is_due, is_scheduled_for_date, most_recent_completion};
pub use rotation::{WeekParity, override_for, resolve_assignee, rotation_week_parity};
pub use streak::{StreakLimits, completion_streak, completion_streak_with_limits};

use hearth_core::entities::{CompletionRecord, Task};

/// Records in `completions` that belong to `task`.
pub(crate) fn records_for<'a>(
    task: &'a Task,
    completions: &'a [CompletionRecord],
) -> impl Iterator<Item = &'a CompletionRecord> + 'a {
    completions
        .iter()
        .filter(move |record| record.task_id == task.id)
}
