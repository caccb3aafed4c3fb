//! Due state and schedule membership of a task.
//!
//! "Due" and "scheduled" are independent facts. A Tuesday/Thursday chore done
//! on Tuesday is scheduled but not due on Thursday; on the following Monday it
//! is due but not scheduled.

use chrono::{Datelike, NaiveDate};
use hearth_core::entities::{CompletionRecord, Task};
use hearth_core::schedule::{MonthlyPattern, Schedule};

use crate::dates::{day_key, ordinal_in_month};
use crate::period::Period;
use crate::records_for;

/// Latest completion of `task` by `completed_at`.
#[must_use]
pub fn most_recent_completion<'a>(
    task: &'a Task,
    completions: &'a [CompletionRecord],
) -> Option<&'a CompletionRecord> {
    records_for(task, completions).max_by_key(|record| record.completed_at)
}

/// Whether `task` still needs doing in the period containing `reference`.
///
/// One-time tasks are due until `completed` is set. Recurring tasks are due
/// unless their most recent completion falls in the current period. A
/// recurrence value this build does not recognise is always due.
#[must_use]
pub fn is_due(task: &Task, completions: &[CompletionRecord], reference: NaiveDate) -> bool {
    match task.schedule() {
        Schedule::OneTime { completed } => !completed,
        Schedule::Unrecognized => {
            tracing::debug!(task = %task.id, "unrecognised recurrence; treating task as due");
            true
        }
        schedule => {
            let Some(period) = Period::of(schedule) else {
                return true;
            };
            most_recent_completion(task, completions)
                .is_none_or(|last| !period.contains(day_key(last.completed_at), reference))
        }
    }
}

/// Whether `task` appears on `date` at all, regardless of completion state.
#[must_use]
pub fn is_scheduled_for_date(task: &Task, date: NaiveDate) -> bool {
    match task.schedule() {
        Schedule::OneTime { .. } | Schedule::Daily => true,
        Schedule::Weekly { days } => days.is_empty() || days.contains(date.weekday()),
        Schedule::Monthly(MonthlyPattern::DayOfMonth(day)) => date.day() == u32::from(day),
        Schedule::Monthly(MonthlyPattern::NthWeekday { weekday, ordinal }) => {
            date.weekday() == weekday && ordinal_in_month(date) == u32::from(ordinal)
        }
        Schedule::Monthly(MonthlyPattern::Unspecified) => true,
        Schedule::Unrecognized => {
            tracing::debug!(task = %task.id, "unrecognised recurrence; treating task as scheduled");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use hearth_core::enums::Recurrence;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::helpers::{d, done_at, done_on, task};

    #[test]
    fn one_time_task_ignores_completion_records() {
        let mut chore = task(None);
        let completions = vec![done_on(d(2026, 6, 10))];
        assert!(is_due(&chore, &completions, d(2026, 6, 10)));

        chore.completed = true;
        assert!(!is_due(&chore, &[], d(2026, 6, 10)));
    }

    #[test]
    fn recurring_task_without_history_is_due() {
        for recurrence in [Recurrence::Daily, Recurrence::Weekly, Recurrence::Monthly] {
            assert!(is_due(&task(Some(recurrence)), &[], d(2026, 6, 10)));
        }
    }

    #[test]
    fn unknown_recurrence_fails_open() {
        let chore = task(Some(Recurrence::Unknown));
        let completions = vec![done_on(d(2026, 6, 10))];
        assert!(is_due(&chore, &completions, d(2026, 6, 10)));
        assert!(is_scheduled_for_date(&chore, d(2026, 6, 10)));
    }

    #[test]
    fn daily_done_today_is_not_due_until_tomorrow() {
        let chore = task(Some(Recurrence::Daily));
        let completions = vec![done_at(d(2026, 6, 10), 23, 50)];
        assert!(!is_due(&chore, &completions, d(2026, 6, 10)));
        assert!(is_due(&chore, &completions, d(2026, 6, 11)));
    }

    #[test]
    fn only_the_most_recent_completion_matters() {
        let chore = task(Some(Recurrence::Monthly));
        // Unordered input; the June record is the latest.
        let completions = vec![done_on(d(2026, 6, 2)), done_on(d(2026, 4, 30))];
        assert_eq!(
            most_recent_completion(&chore, &completions).map(|r| r.completed_at.date()),
            Some(d(2026, 6, 2))
        );
        assert!(!is_due(&chore, &completions, d(2026, 6, 30)));
        assert!(is_due(&chore, &completions, d(2026, 7, 1)));
    }

    #[test]
    fn weekly_due_follows_loose_week() {
        let chore = task(Some(Recurrence::Weekly));
        // Done Monday 2026-06-08.
        let completions = vec![done_on(d(2026, 6, 8))];
        assert!(!is_due(&chore, &completions, d(2026, 6, 13)));
        // Sunday 14th has a lower weekday index than Monday.
        assert!(is_due(&chore, &completions, d(2026, 6, 14)));
    }

    // 2026-06-08 Mon, 06-09 Tue, 06-10 Wed, 06-12 Fri, 06-14 Sun.
    #[rstest]
    #[case::monday(d(2026, 6, 8), true)]
    #[case::tuesday(d(2026, 6, 9), false)]
    #[case::wednesday(d(2026, 6, 10), true)]
    #[case::friday(d(2026, 6, 12), true)]
    #[case::sunday(d(2026, 6, 14), false)]
    fn weekly_days_limit_schedule(#[case] date: NaiveDate, #[case] expected: bool) {
        let mut chore = task(Some(Recurrence::Weekly));
        chore.recurrence_days = vec![1, 3, 5];
        assert_eq!(is_scheduled_for_date(&chore, date), expected);
    }

    #[test]
    fn weekly_without_days_is_any_day() {
        let chore = task(Some(Recurrence::Weekly));
        assert!(is_scheduled_for_date(&chore, d(2026, 6, 9)));
    }

    #[test]
    fn day_of_month_31_never_matches_short_months() {
        let mut chore = task(Some(Recurrence::Monthly));
        chore.recurrence_day_of_month = Some(31);
        assert!(is_scheduled_for_date(&chore, d(2026, 5, 31)));
        assert!(!is_scheduled_for_date(&chore, d(2026, 6, 30)));
        assert!(!is_scheduled_for_date(&chore, d(2026, 6, 1)));
    }

    // Sundays in March 2026: 1st, 8th, 15th, 22nd, 29th.
    #[rstest]
    #[case::first_sunday(d(2026, 3, 1), false)]
    #[case::second_sunday(d(2026, 3, 8), true)]
    #[case::third_sunday(d(2026, 3, 15), false)]
    #[case::second_monday(d(2026, 3, 9), false)]
    fn nth_weekday_pattern(#[case] date: NaiveDate, #[case] expected: bool) {
        let mut chore = task(Some(Recurrence::Monthly));
        chore.recurrence_weekday = Some(0);
        chore.recurrence_week_of_month = Some(2);
        assert_eq!(is_scheduled_for_date(&chore, date), expected);
    }

    #[test]
    fn scheduled_is_independent_of_completion() {
        let mut chore = task(Some(Recurrence::Weekly));
        chore.recurrence_days = vec![2, 4];
        let completions = vec![done_on(d(2026, 6, 9))];
        // Monday after a Tuesday completion the week before: due, not scheduled.
        assert!(is_due(&chore, &completions, d(2026, 6, 15)));
        assert!(!is_scheduled_for_date(&chore, d(2026, 6, 15)));
        // Thursday of the same week: scheduled, not due.
        assert!(!is_due(&chore, &completions, d(2026, 6, 11)));
        assert!(is_scheduled_for_date(&chore, d(2026, 6, 11)));
    }

    #[test]
    fn one_time_task_is_always_scheduled() {
        let mut chore = task(None);
        chore.due_date = Some(d(2026, 6, 30));
        assert!(is_scheduled_for_date(&chore, d(2026, 1, 1)));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let chore = task(Some(Recurrence::Daily));
        let completions = vec![done_on(d(2026, 6, 9))];
        let first = is_due(&chore, &completions, d(2026, 6, 10));
        assert_eq!(first, is_due(&chore, &completions, d(2026, 6, 10)));
    }
}
