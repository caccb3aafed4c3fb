use anyhow::Context;
use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use hearth_config::{HearthConfig, StreakConfig};
use hearth_engine::StreakLimits;

/// Shared application state initialized once at startup.
pub struct AppContext {
    pub config: HearthConfig,
}

impl AppContext {
    pub const fn new(config: HearthConfig) -> Self {
        Self { config }
    }

    /// Streak walk limits from the `[streak]` config section.
    pub const fn streak_limits(&self) -> StreakLimits {
        limits_from_config(&self.config.streak)
    }

    /// Household wall-clock time.
    ///
    /// Uses `general.utc_offset_minutes` when set, the machine's local zone
    /// otherwise.
    pub fn now(&self) -> anyhow::Result<NaiveDateTime> {
        match self.config.general.utc_offset_minutes {
            Some(minutes) => {
                let offset = minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .with_context(|| format!("invalid UTC offset of {minutes} minutes"))?;
                Ok(Utc::now().with_timezone(&offset).naive_local())
            }
            None => Ok(Local::now().naive_local()),
        }
    }

    /// Household calendar day, used when a command gets no explicit date.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        Ok(self.now()?.date())
    }
}

const fn limits_from_config(config: &StreakConfig) -> StreakLimits {
    StreakLimits {
        daily: config.daily_limit,
        weekly: config.weekly_limit,
        monthly: config.monthly_limit,
    }
}
