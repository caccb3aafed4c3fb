//! Write-side checks for task rows.
//!
//! The CRUD layer calls these before persisting. The engine itself never does:
//! malformed rows it reads still evaluate with fail-open defaults.

use std::collections::HashSet;

use crate::entities::Task;
use crate::enums::{Recurrence, RotationMode};
use crate::errors::CoreError;

impl Task {
    /// Check field ranges and rotation shape.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(day) = self.recurrence_days.iter().find(|&&day| day > 6) {
            return Err(invalid(format!("recurrence_days: weekday {day} is outside 0-6")));
        }
        if let Some(day) = self
            .recurrence_day_of_month
            .filter(|day| !(1..=31).contains(day))
        {
            return Err(invalid(format!(
                "recurrence_day_of_month: {day} is outside 1-31"
            )));
        }
        if let Some(weekday) = self.recurrence_weekday.filter(|&weekday| weekday > 6) {
            return Err(invalid(format!(
                "recurrence_weekday: {weekday} is outside 0-6"
            )));
        }
        if let Some(ordinal) = self
            .recurrence_week_of_month
            .filter(|ordinal| !(1..=5).contains(ordinal))
        {
            return Err(invalid(format!(
                "recurrence_week_of_month: {ordinal} is outside 1-5"
            )));
        }
        if self.recurrence_weekday.is_some() != self.recurrence_week_of_month.is_some() {
            return Err(invalid(
                "recurrence_weekday and recurrence_week_of_month must be set together".into(),
            ));
        }
        if self.recurrence() == Recurrence::Unknown {
            return Err(invalid("recurrence: unrecognised value".into()));
        }

        self.validate_rotation()
    }

    fn validate_rotation(&self) -> Result<(), CoreError> {
        match self.rotation_mode {
            RotationMode::None => Ok(()),
            RotationMode::OddEvenWeek => {
                if self.recurrence() != Recurrence::Weekly {
                    return Err(invalid(
                        "rotation_mode: odd_even_week requires weekly recurrence".into(),
                    ));
                }
                if self.rotation_assignees.len() != 2 {
                    return Err(invalid(format!(
                        "rotation_assignees: expected exactly 2 members, got {}",
                        self.rotation_assignees.len()
                    )));
                }
                let distinct: HashSet<_> = self.rotation_assignees.iter().collect();
                if distinct.len() != 2 {
                    return Err(invalid("rotation_assignees: members must differ".into()));
                }
                if self.rotation_anchor_date.is_none() {
                    return Err(invalid(
                        "rotation_anchor_date: required when rotation is enabled".into(),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn invalid(message: String) -> CoreError {
    CoreError::Validation(message)
}
