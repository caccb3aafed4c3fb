//! Typed view of a task's recurrence.
//!
//! Storage keeps recurrence as a handful of nullable columns. [`Task::schedule`]
//! folds them into a single [`Schedule`] value once, so every engine operation
//! has exactly one place where it branches on the cadence.

use chrono::Weekday;

use crate::entities::Task;
use crate::enums::Recurrence;

/// Map a stored weekday integer (0 = Sunday .. 6 = Saturday) to a [`Weekday`].
#[must_use]
pub const fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Inverse of [`weekday_from_index`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Set of weekdays a weekly task is scheduled on. Empty means "any day".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: Self = Self(0);

    /// Build from stored integers, skipping anything outside 0-6.
    #[must_use]
    pub fn from_indices(indices: &[u8]) -> Self {
        indices
            .iter()
            .filter_map(|&index| weekday_from_index(index))
            .collect()
    }

    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= 1 << weekday_index(weekday);
    }

    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday_index(weekday)) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for weekday in iter {
            set.insert(weekday);
        }
        set
    }
}

/// Which day(s) of the month a monthly task lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyPattern {
    /// A fixed calendar day, 1-31. Days a month does not have never match.
    DayOfMonth(u8),
    /// The `ordinal`-th (1-5) occurrence of `weekday` in the month.
    NthWeekday { weekday: Weekday, ordinal: u8 },
    /// Neither pattern is configured.
    Unspecified,
}

/// The cadence of a task with only the fields that matter for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    OneTime { completed: bool },
    Daily,
    Weekly {
        days: WeekdaySet,
    },
    Monthly(MonthlyPattern),
    /// A stored recurrence value this build does not understand.
    Unrecognized,
}

impl Schedule {
    #[must_use]
    pub const fn is_one_time(self) -> bool {
        matches!(self, Self::OneTime { .. })
    }
}

impl Task {
    /// Fold the stored recurrence columns into a [`Schedule`].
    ///
    /// For monthly tasks the nth-weekday pattern wins when both
    /// `recurrence_weekday` and `recurrence_week_of_month` are present;
    /// otherwise `recurrence_day_of_month` is used.
    #[must_use]
    pub fn schedule(&self) -> Schedule {
        match self.recurrence() {
            Recurrence::None => Schedule::OneTime {
                completed: self.completed,
            },
            Recurrence::Daily => Schedule::Daily,
            Recurrence::Weekly => Schedule::Weekly {
                days: WeekdaySet::from_indices(&self.recurrence_days),
            },
            Recurrence::Monthly => Schedule::Monthly(self.monthly_pattern()),
            Recurrence::Unknown => Schedule::Unrecognized,
        }
    }

    fn monthly_pattern(&self) -> MonthlyPattern {
        let nth = self
            .recurrence_weekday
            .and_then(weekday_from_index)
            .zip(self.recurrence_week_of_month);
        if let Some((weekday, ordinal)) = nth {
            return MonthlyPattern::NthWeekday { weekday, ordinal };
        }
        self.recurrence_day_of_month
            .map_or(MonthlyPattern::Unspecified, MonthlyPattern::DayOfMonth)
    }
}
