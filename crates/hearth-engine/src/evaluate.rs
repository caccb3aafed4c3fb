//! One-call evaluation of a task for a dashboard read.

use chrono::NaiveDate;
use hearth_core::entities::{AssignmentOverride, CompletionRecord, Task};
use hearth_core::responses::TaskSnapshot;
use hearth_core::snapshot::HouseholdSnapshot;

use crate::period::completions_in_current_period;
use crate::recurrence::{is_due, is_scheduled_for_date};
use crate::rotation::resolve_assignee;
use crate::streak::{StreakLimits, completion_streak_with_limits};

/// Due state, schedule, assignee, current-period completions and streak of
/// `task` on `date`.
#[must_use]
pub fn evaluate_task(
    task: &Task,
    completions: &[CompletionRecord],
    overrides: &[AssignmentOverride],
    date: NaiveDate,
    limits: StreakLimits,
) -> TaskSnapshot {
    TaskSnapshot {
        task_id: task.id.clone(),
        title: task.title.clone(),
        recurrence: task.recurrence(),
        due: is_due(task, completions, date),
        scheduled: is_scheduled_for_date(task, date),
        assignee_id: resolve_assignee(task, overrides, date).map(str::to_owned),
        completions_this_period: completions_in_current_period(task, completions, date)
            .into_iter()
            .cloned()
            .collect(),
        streak: completion_streak_with_limits(task, completions, date, limits),
    }
}

/// [`evaluate_task`] for every task in `snapshot`, in snapshot order.
#[must_use]
pub fn evaluate_household(
    snapshot: &HouseholdSnapshot,
    date: NaiveDate,
    limits: StreakLimits,
) -> Vec<TaskSnapshot> {
    snapshot
        .tasks
        .iter()
        .map(|task| {
            evaluate_task(
                task,
                &snapshot.completions,
                &snapshot.overrides,
                date,
                limits,
            )
        })
        .collect()
}
