use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{Recurrence, RotationMode};

/// A schedulable household chore.
///
/// The recurrence-specific fields are only meaningful for the matching
/// recurrence; see [`Task::schedule`] for the typed view the engine uses.
/// Weekday integers are 0-6 with 0 = Sunday.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub household_id: String,
    pub title: String,
    /// `None` means one-time, same as `Some(Recurrence::None)`.
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub recurrence_days: Vec<u8>,
    pub recurrence_day_of_month: Option<u8>,
    pub recurrence_weekday: Option<u8>,
    pub recurrence_week_of_month: Option<u8>,
    #[serde(default)]
    pub rotation_mode: RotationMode,
    #[serde(default)]
    pub rotation_assignees: Vec<String>,
    /// Unparseable stored values read as absent.
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub rotation_anchor_date: Option<NaiveDate>,
    pub assigned_to_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Stored recurrence with the absent case folded into [`Recurrence::None`].
    #[must_use]
    pub fn recurrence(&self) -> Recurrence {
        self.recurrence.unwrap_or(Recurrence::None)
    }

    #[must_use]
    pub fn is_one_time(&self) -> bool {
        !self.recurrence().is_recurring()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDate {
    Date(NaiveDate),
    Malformed(IgnoredAny),
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StoredDate>::deserialize(deserializer)? {
        Some(StoredDate::Date(date)) => Some(date),
        Some(StoredDate::Malformed(_)) => {
            tracing::warn!("rotation_anchor_date is not a YYYY-MM-DD date; ignoring it");
            None
        }
        None => None,
    })
}
