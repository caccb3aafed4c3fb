//! Consecutive completed periods, counted backward from a reference date.

use chrono::NaiveDate;
use hearth_core::entities::{CompletionRecord, Task};
use serde::{Deserialize, Serialize};

use crate::dates::day_key;
use crate::period::Period;
use crate::records_for;

/// Upper bound on how many periods a streak walk visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakLimits {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
}

impl Default for StreakLimits {
    fn default() -> Self {
        Self {
            daily: 365,
            weekly: 52,
            monthly: 12,
        }
    }
}

impl StreakLimits {
    #[must_use]
    pub const fn for_period(&self, period: Period) -> u32 {
        match period {
            Period::Day => self.daily,
            Period::Week => self.weekly,
            Period::Month => self.monthly,
        }
    }
}

/// Streak of `task` at `reference` with the default walk limits.
#[must_use]
pub fn completion_streak(task: &Task, completions: &[CompletionRecord], reference: NaiveDate) -> u32 {
    completion_streak_with_limits(task, completions, reference, StreakLimits::default())
}

/// Count consecutive periods ending at `reference` that each hold at least one
/// completion. The walk stops at the first empty period or after the limit
/// for the task's period. One-time and unrecognised tasks have no streak.
#[must_use]
pub fn completion_streak_with_limits(
    task: &Task,
    completions: &[CompletionRecord],
    reference: NaiveDate,
    limits: StreakLimits,
) -> u32 {
    let Some(period) = Period::of(task.schedule()) else {
        return 0;
    };
    let days: Vec<NaiveDate> = records_for(task, completions)
        .map(|record| day_key(record.completed_at))
        .collect();
    if days.is_empty() {
        return 0;
    }

    let limit = limits.for_period(period);
    let mut cursor = reference;
    let mut streak = 0;
    while streak < limit {
        if !days.iter().any(|&day| period.contains(day, cursor)) {
            return streak;
        }
        streak += 1;
        match period.step_back(cursor) {
            Some(previous) => cursor = previous,
            None => return streak,
        }
    }

    tracing::debug!(task = %task.id, ?period, limit, "streak walk reached its limit");
    streak
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use hearth_core::enums::Recurrence;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{d, done_on, task};

    fn daily_run(end: NaiveDate, days: i64) -> Vec<CompletionRecord> {
        (0..days).map(|back| done_on(end - Duration::days(back))).collect()
    }

    #[test]
    fn seven_consecutive_days() {
        let chore = task(Some(Recurrence::Daily));
        let today = d(2026, 6, 10);
        assert_eq!(completion_streak(&chore, &daily_run(today, 7), today), 7);
    }

    #[test]
    fn gap_cuts_the_streak() {
        let chore = task(Some(Recurrence::Daily));
        let today = d(2026, 6, 10);
        let gap = today - Duration::days(3);
        let completions: Vec<_> = daily_run(today, 7)
            .into_iter()
            .filter(|record| record.completed_at.date() != gap)
            .collect();
        assert_eq!(completion_streak(&chore, &completions, today), 3);
    }

    #[test]
    fn nothing_today_means_zero() {
        let chore = task(Some(Recurrence::Daily));
        let today = d(2026, 6, 10);
        let completions = daily_run(today - Duration::days(1), 5);
        assert_eq!(completion_streak(&chore, &completions, today), 0);
    }

    #[test]
    fn extra_completions_in_one_day_count_once() {
        let chore = task(Some(Recurrence::Daily));
        let today = d(2026, 6, 10);
        let mut completions = daily_run(today, 2);
        completions.push(done_on(today));
        assert_eq!(completion_streak(&chore, &completions, today), 2);
    }

    #[test]
    fn daily_walk_is_capped() {
        let chore = task(Some(Recurrence::Daily));
        let today = d(2026, 6, 10);
        let completions = daily_run(today, 400);
        assert_eq!(completion_streak(&chore, &completions, today), 365);

        let limits = StreakLimits {
            daily: 30,
            ..StreakLimits::default()
        };
        assert_eq!(
            completion_streak_with_limits(&chore, &completions, today, limits),
            30
        );
    }

    #[test]
    fn weekly_counts_consecutive_weeks() {
        let chore = task(Some(Recurrence::Weekly));
        // Wednesdays, with 2026-05-20 skipped.
        let completions = vec![
            done_on(d(2026, 6, 10)),
            done_on(d(2026, 6, 3)),
            done_on(d(2026, 5, 27)),
            done_on(d(2026, 5, 13)),
        ];
        assert_eq!(completion_streak(&chore, &completions, d(2026, 6, 10)), 3);
    }

    #[test]
    fn weekly_window_also_reaches_forward() {
        let chore = task(Some(Recurrence::Weekly));
        // Monday 2026-06-08 sits within six days of both the Wednesday 10th
        // and the Wednesday 3rd walk steps.
        let completions = vec![done_on(d(2026, 6, 8))];
        assert_eq!(completion_streak(&chore, &completions, d(2026, 6, 10)), 2);
    }

    #[test]
    fn weekly_late_weekday_breaks_alignment() {
        let chore = task(Some(Recurrence::Weekly));
        // Friday completions never match a Wednesday-aligned walk.
        let completions = vec![done_on(d(2026, 6, 5)), done_on(d(2026, 5, 29))];
        assert_eq!(completion_streak(&chore, &completions, d(2026, 6, 10)), 0);
    }

    #[test]
    fn monthly_counts_consecutive_months() {
        let chore = task(Some(Recurrence::Monthly));
        let completions = vec![
            done_on(d(2026, 3, 31)),
            done_on(d(2026, 2, 14)),
            done_on(d(2026, 1, 2)),
            done_on(d(2025, 11, 20)),
        ];
        assert_eq!(completion_streak(&chore, &completions, d(2026, 3, 31)), 3);
    }

    #[test]
    fn weekly_walk_is_capped() {
        let chore = task(Some(Recurrence::Weekly));
        // 2026-06-10 is a Wednesday; one completion every Wednesday for 70 weeks.
        let today = d(2026, 6, 10);
        let completions: Vec<_> = (0..70)
            .map(|back| done_on(today - Duration::weeks(back)))
            .collect();
        assert_eq!(completion_streak(&chore, &completions, today), 52);

        let limits = StreakLimits {
            weekly: 60,
            ..StreakLimits::default()
        };
        assert_eq!(
            completion_streak_with_limits(&chore, &completions, today, limits),
            60
        );
    }

    #[test]
    fn monthly_walk_is_capped_at_a_year() {
        let chore = task(Some(Recurrence::Monthly));
        let completions: Vec<_> = (1..=12)
            .flat_map(|month| [done_on(d(2025, month, 1)), done_on(d(2026, month, 1))])
            .collect();
        assert_eq!(completion_streak(&chore, &completions, d(2026, 12, 15)), 12);
    }

    #[test]
    fn one_time_task_never_streaks() {
        let mut chore = task(None);
        chore.completed = true;
        let today = d(2026, 6, 10);
        assert_eq!(completion_streak(&chore, &daily_run(today, 10), today), 0);
    }

    #[test]
    fn empty_history_is_zero() {
        let chore = task(Some(Recurrence::Weekly));
        assert_eq!(completion_streak(&chore, &[], d(2026, 6, 10)), 0);
    }
}
