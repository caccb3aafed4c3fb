//! Recurrence and rotation enums for Hearth.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the strings stored in the household database.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Recurrence
// ---------------------------------------------------------------------------

/// Repeat cadence of a task as stored.
///
/// A missing value and `none` both mean "one-time". Any string the engine does
/// not recognise deserializes to [`Recurrence::Unknown`] instead of failing the
/// whole row; such tasks evaluate as due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
    #[serde(other)]
    Unknown,
}

impl Recurrence {
    /// Return the string representation used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this cadence repeats at all.
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RotationMode
// ---------------------------------------------------------------------------

/// How responsibility for a weekly task alternates between members.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    #[default]
    None,
    /// Two members swap every week, counted from the rotation anchor date.
    OddEvenWeek,
}

impl RotationMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OddEvenWeek => "odd_even_week",
        }
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
