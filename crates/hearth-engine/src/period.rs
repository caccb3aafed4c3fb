//! The day/week/month window a recurring task is judged against.

use chrono::{Duration, NaiveDate};
use hearth_core::entities::{CompletionRecord, Task};
use hearth_core::schedule::Schedule;
use serde::{Deserialize, Serialize};

use crate::dates::{day_key, month_before, same_day, same_month, same_week};
use crate::records_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    /// Period of a schedule. One-time and unrecognised schedules have none.
    #[must_use]
    pub const fn of(schedule: Schedule) -> Option<Self> {
        match schedule {
            Schedule::Daily => Some(Self::Day),
            Schedule::Weekly { .. } => Some(Self::Week),
            Schedule::Monthly(_) => Some(Self::Month),
            Schedule::OneTime { .. } | Schedule::Unrecognized => None,
        }
    }

    /// Whether a completion on `day` falls in the period around `reference`.
    #[must_use]
    pub fn contains(self, day: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::Day => same_day(day, reference),
            Self::Week => same_week(day, reference),
            Self::Month => same_month(day, reference),
        }
    }

    /// Reference date of the previous period.
    #[must_use]
    pub fn step_back(self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day => reference.checked_sub_signed(Duration::days(1)),
            Self::Week => reference.checked_sub_signed(Duration::days(7)),
            Self::Month => month_before(reference),
        }
    }
}

/// Every completion of `task` in the period containing `reference`.
///
/// One-time tasks have no periods and always yield an empty list. Several
/// completions in one period are all returned.
#[must_use]
pub fn completions_in_current_period<'a>(
    task: &'a Task,
    completions: &'a [CompletionRecord],
    reference: NaiveDate,
) -> Vec<&'a CompletionRecord> {
    let Some(period) = Period::of(task.schedule()) else {
        return Vec::new();
    };
    records_for(task, completions)
        .filter(|record| period.contains(day_key(record.completed_at), reference))
        .collect()
}
