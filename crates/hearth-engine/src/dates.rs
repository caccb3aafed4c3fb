//! Calendar comparisons on household wall-clock dates.
//!
//! Only year, month and day components take part; there is no time zone
//! handling here. Callers convert timestamps to the household's local
//! calendar day before comparing.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use hearth_core::schedule::weekday_index;

/// Calendar day of a wall-clock timestamp.
#[must_use]
pub fn day_key(at: NaiveDateTime) -> NaiveDate {
    at.date()
}

#[must_use]
pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

#[must_use]
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Loose week comparison: fewer than 7 days apart and `a` falls on the same
/// or an earlier weekday than `b` (Sunday = 0).
///
/// This is not an ISO week check. Two dates six days apart can straddle a
/// Sunday and still compare equal; streak and due state depend on exactly
/// this boundary.
#[must_use]
pub fn same_week(a: NaiveDate, b: NaiveDate) -> bool {
    days_between(a, b).abs() < 7 && weekday_index(a.weekday()) <= weekday_index(b.weekday())
}

/// Signed whole days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Which occurrence of its weekday `date` is within its month, 1-5.
#[must_use]
pub fn ordinal_in_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Same day one calendar month earlier, clamped to the end of shorter months.
///
/// `None` only at the lower bound of the representable date range.
#[must_use]
pub fn month_before(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(1))
}
