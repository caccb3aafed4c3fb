//! # hearth-config
//!
//! Layered configuration loading for Hearth using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HEARTH_*` prefix, `__` as separator)
//! 2. Project-level `.hearth/config.toml`
//! 3. User-level `~/.config/hearth/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HEARTH_STREAK__DAILY_LIMIT` -> `streak.daily_limit`,
//! `HEARTH_GENERAL__UTC_OFFSET_MINUTES` -> `general.utc_offset_minutes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hearth_config::HearthConfig;
//!
//! let config = HearthConfig::load_with_dotenv().expect("config");
//! println!("daily streaks stop after {} days", config.streak.daily_limit);
//! ```

mod error;
mod general;
mod streak;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use streak::StreakConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Offsets must stay strictly inside one day.
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HearthConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub streak: StreakConfig,
}

impl HearthConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if there is one.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".hearth/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HEARTH_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(offset) = self.general.utc_offset_minutes {
            if offset.unsigned_abs() >= MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
                return Err(ConfigError::InvalidValue {
                    field: "general.utc_offset_minutes".to_string(),
                    reason: format!("{offset} is not within one day of UTC"),
                });
            }
        }
        self.streak.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hearth").join("config.toml"))
    }
}
