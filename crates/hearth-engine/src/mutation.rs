//! Decide what the external complete/uncomplete mutations should write.
//!
//! The engine does not persist anything. These planners turn the current
//! snapshot into a [`CompletionPlan`] or [`UncompletionPlan`] that the storage
//! layer applies in its own transaction.

use chrono::NaiveDateTime;
use hearth_core::entities::{CompletionRecord, NewCompletion, Task};
use hearth_core::responses::{CompletionPlan, UncompletionPlan};

use crate::dates::day_key;
use crate::recurrence::{is_due, most_recent_completion};

/// Plan for `member_id` completing `task` at wall-clock time `at`.
///
/// One-time tasks flip their flag. Recurring tasks always get a new record,
/// flagged when the current period was already done.
#[must_use]
pub fn plan_completion(
    task: &Task,
    completions: &[CompletionRecord],
    at: NaiveDateTime,
    member_id: &str,
) -> CompletionPlan {
    if task.is_one_time() {
        return if task.completed {
            CompletionPlan::AlreadyCompleted {
                task_id: task.id.clone(),
            }
        } else {
            CompletionPlan::MarkCompleted {
                task_id: task.id.clone(),
            }
        };
    }

    CompletionPlan::AppendRecord {
        record: NewCompletion {
            task_id: task.id.clone(),
            completed_at: at,
            completed_by_id: member_id.to_owned(),
        },
        already_done_this_period: !is_due(task, completions, day_key(at)),
    }
}

/// Plan for undoing the latest completion of `task`.
#[must_use]
pub fn plan_uncompletion(task: &Task, completions: &[CompletionRecord]) -> UncompletionPlan {
    if task.is_one_time() {
        return if task.completed {
            UncompletionPlan::MarkIncomplete {
                task_id: task.id.clone(),
            }
        } else {
            UncompletionPlan::Nothing {
                task_id: task.id.clone(),
            }
        };
    }

    most_recent_completion(task, completions).map_or_else(
        || UncompletionPlan::Nothing {
            task_id: task.id.clone(),
        },
        |record| UncompletionPlan::RemoveRecord {
            record: record.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use hearth_core::enums::Recurrence;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{d, done_at, done_on, task};

    #[test]
    fn one_time_completion_flips_flag() {
        let mut chore = task(None);
        let at = d(2026, 6, 10).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(
            plan_completion(&chore, &[], at, "mem-a"),
            CompletionPlan::MarkCompleted {
                task_id: "task-1".into()
            }
        );

        chore.completed = true;
        assert_eq!(
            plan_completion(&chore, &[], at, "mem-a"),
            CompletionPlan::AlreadyCompleted {
                task_id: "task-1".into()
            }
        );
        assert_eq!(
            plan_uncompletion(&chore, &[]),
            UncompletionPlan::MarkIncomplete {
                task_id: "task-1".into()
            }
        );
    }

    #[test]
    fn recurring_completion_appends_record() {
        let chore = task(Some(Recurrence::Daily));
        let at = d(2026, 6, 10).and_hms_opt(18, 5, 0).unwrap();

        let CompletionPlan::AppendRecord {
            record,
            already_done_this_period,
        } = plan_completion(&chore, &[done_on(d(2026, 6, 9))], at, "mem-b")
        else {
            panic!("expected a record to append");
        };
        assert_eq!(record.completed_by_id, "mem-b");
        assert_eq!(record.completed_at, at);
        assert!(!already_done_this_period);

        let plan = plan_completion(&chore, &[done_on(d(2026, 6, 10))], at, "mem-b");
        assert!(matches!(
            plan,
            CompletionPlan::AppendRecord {
                already_done_this_period: true,
                ..
            }
        ));
    }

    #[test]
    fn uncompletion_removes_latest_record() {
        let chore = task(Some(Recurrence::Weekly));
        let completions = vec![
            done_at(d(2026, 6, 10), 9, 0),
            done_at(d(2026, 6, 10), 20, 0),
            done_at(d(2026, 6, 3), 9, 0),
        ];
        assert_eq!(
            plan_uncompletion(&chore, &completions),
            UncompletionPlan::RemoveRecord {
                record: completions[1].clone()
            }
        );
        assert_eq!(
            plan_uncompletion(&chore, &[]),
            UncompletionPlan::Nothing {
                task_id: "task-1".into()
            }
        );
    }
}
