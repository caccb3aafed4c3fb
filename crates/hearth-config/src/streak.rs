//! Streak walk limits.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_daily_limit() -> u32 {
    365
}

const fn default_weekly_limit() -> u32 {
    52
}

const fn default_monthly_limit() -> u32 {
    12
}

/// Ten years of days.
const MAX_DAILY_LIMIT: u32 = 3660;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StreakConfig {
    /// Most days a daily streak walk visits.
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,

    /// Most weeks a weekly streak walk visits.
    #[serde(default = "default_weekly_limit")]
    pub weekly_limit: u32,

    /// Most months a monthly streak walk visits.
    #[serde(default = "default_monthly_limit")]
    pub monthly_limit: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            daily_limit: default_daily_limit(),
            weekly_limit: default_weekly_limit(),
            monthly_limit: default_monthly_limit(),
        }
    }
}

impl StreakConfig {
    /// Reject zero limits and unreasonably long daily walks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("streak.daily_limit", self.daily_limit),
            ("streak.weekly_limit", self.weekly_limit),
            ("streak.monthly_limit", self.monthly_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        if self.daily_limit > MAX_DAILY_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "streak.daily_limit".to_string(),
                reason: format!("must be at most {MAX_DAILY_LIMIT}"),
            });
        }
        Ok(())
    }
}
