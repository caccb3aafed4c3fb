//! Who is responsible for a task on a given date.
//!
//! Precedence, highest first:
//! 1. an assignment override for that exact day
//! 2. odd/even week rotation between two members, counted from the anchor date
//! 3. the task's static assignee

use chrono::NaiveDate;
use hearth_core::entities::{AssignmentOverride, Task};
use hearth_core::enums::RotationMode;
use serde::{Deserialize, Serialize};

use crate::dates::days_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekParity {
    /// Weeks 0, 2, 4, ... (and -2, -4, ...) from the anchor: first assignee.
    Even,
    /// Weeks 1, 3, ... (and -1, -3, ...): second assignee.
    Odd,
}

/// Whole weeks from `anchor` to `date`, rounded toward negative infinity.
#[must_use]
pub fn weeks_since_anchor(anchor: NaiveDate, date: NaiveDate) -> i64 {
    days_between(anchor, date).div_euclid(7)
}

/// Parity of the rotation week containing `date`.
///
/// Floor division keeps the alternation unbroken across the anchor: the six
/// days before the anchor are week -1 (odd), not week 0.
#[must_use]
pub fn rotation_week_parity(anchor: NaiveDate, date: NaiveDate) -> WeekParity {
    if weeks_since_anchor(anchor, date).rem_euclid(2) == 0 {
        WeekParity::Even
    } else {
        WeekParity::Odd
    }
}

/// The override for `task` on `date`, if any.
#[must_use]
pub fn override_for<'a>(
    task: &Task,
    overrides: &'a [AssignmentOverride],
    date: NaiveDate,
) -> Option<&'a AssignmentOverride> {
    overrides
        .iter()
        .find(|entry| entry.task_id == task.id && entry.date == date)
}

/// Member responsible for `task` on `date`, or `None` when nobody is assigned.
///
/// One-time tasks only ever use the static assignee. Rotation that is enabled
/// but incomplete (fewer than two assignees, no anchor date) falls back to the
/// static assignee.
#[must_use]
pub fn resolve_assignee<'a>(
    task: &'a Task,
    overrides: &'a [AssignmentOverride],
    date: NaiveDate,
) -> Option<&'a str> {
    if task.is_one_time() {
        return task.assigned_to_id.as_deref();
    }

    if let Some(entry) = override_for(task, overrides, date) {
        return Some(entry.assigned_to_id.as_str());
    }

    rotation_assignee(task, date).or(task.assigned_to_id.as_deref())
}

fn rotation_assignee(task: &Task, date: NaiveDate) -> Option<&str> {
    match task.rotation_mode {
        RotationMode::None => None,
        RotationMode::OddEvenWeek => {
            let (Some(anchor), [even, odd]) =
                (task.rotation_anchor_date, task.rotation_assignees.as_slice())
            else {
                tracing::debug!(
                    task = %task.id,
                    assignees = task.rotation_assignees.len(),
                    has_anchor = task.rotation_anchor_date.is_some(),
                    "rotation incomplete; using static assignee"
                );
                return None;
            };
            match rotation_week_parity(anchor, date) {
                WeekParity::Even => Some(even.as_str()),
                WeekParity::Odd => Some(odd.as_str()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hearth_core::enums::Recurrence;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::helpers::{d, override_on, rotating_task, task};

    // Anchor Monday 2026-03-02.
    #[rstest]
    #[case::anchor_day(d(2026, 3, 2), "mem-a")]
    #[case::end_of_week_zero(d(2026, 3, 8), "mem-a")]
    #[case::week_one(d(2026, 3, 9), "mem-b")]
    #[case::week_two(d(2026, 3, 16), "mem-a")]
    #[case::day_before_anchor(d(2026, 3, 1), "mem-b")]
    #[case::week_minus_one(d(2026, 2, 23), "mem-b")]
    #[case::week_minus_two(d(2026, 2, 16), "mem-a")]
    #[case::eight_days_before(d(2026, 2, 22), "mem-a")]
    fn odd_even_parity_across_anchor(#[case] date: NaiveDate, #[case] expected: &str) {
        let chore = rotating_task(d(2026, 3, 2));
        assert_eq!(resolve_assignee(&chore, &[], date), Some(expected));
    }

    #[test]
    fn weeks_since_anchor_floors_negative_spans() {
        let anchor = d(2026, 3, 2);
        assert_eq!(weeks_since_anchor(anchor, d(2026, 3, 1)), -1);
        assert_eq!(weeks_since_anchor(anchor, d(2026, 2, 23)), -1);
        assert_eq!(weeks_since_anchor(anchor, d(2026, 2, 22)), -2);
        assert_eq!(weeks_since_anchor(anchor, d(2026, 3, 15)), 1);
    }

    #[test]
    fn override_beats_rotation() {
        let chore = rotating_task(d(2026, 3, 2));
        let overrides = vec![override_on(d(2026, 3, 9), "mem-c")];
        assert_eq!(resolve_assignee(&chore, &overrides, d(2026, 3, 9)), Some("mem-c"));
        assert_eq!(resolve_assignee(&chore, &overrides, d(2026, 3, 10)), Some("mem-b"));
    }

    #[test]
    fn override_for_another_task_is_ignored() {
        let chore = rotating_task(d(2026, 3, 2));
        let mut foreign = override_on(d(2026, 3, 9), "mem-c");
        foreign.task_id = "task-2".into();
        assert_eq!(resolve_assignee(&chore, &[foreign], d(2026, 3, 9)), Some("mem-b"));
    }

    #[test]
    fn incomplete_rotation_falls_back_to_static() {
        let mut chore = rotating_task(d(2026, 3, 2));
        chore.rotation_assignees.truncate(1);
        assert_eq!(resolve_assignee(&chore, &[], d(2026, 3, 9)), Some("mem-static"));

        let mut chore = rotating_task(d(2026, 3, 2));
        chore.rotation_anchor_date = None;
        assert_eq!(resolve_assignee(&chore, &[], d(2026, 3, 9)), Some("mem-static"));

        chore.assigned_to_id = None;
        assert_eq!(resolve_assignee(&chore, &[], d(2026, 3, 9)), None);
    }

    #[test]
    fn one_time_task_skips_overrides_and_rotation() {
        let mut chore = task(None);
        chore.assigned_to_id = Some("mem-static".into());
        let overrides = vec![override_on(d(2026, 3, 9), "mem-c")];
        assert_eq!(resolve_assignee(&chore, &overrides, d(2026, 3, 9)), Some("mem-static"));
    }

    #[test]
    fn override_applies_without_rotation() {
        let mut chore = task(Some(Recurrence::Daily));
        chore.assigned_to_id = Some("mem-static".into());
        let overrides = vec![override_on(d(2026, 3, 9), "mem-c")];
        assert_eq!(resolve_assignee(&chore, &overrides, d(2026, 3, 9)), Some("mem-c"));
        assert_eq!(resolve_assignee(&chore, &overrides, d(2026, 3, 8)), Some("mem-static"));
    }
}
