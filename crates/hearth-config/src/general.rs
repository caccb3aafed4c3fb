//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default tracing filter when `HEARTH_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Household wall-clock offset from UTC, in minutes. Used to work out
    /// "today". Unset means the machine's local time zone.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            utc_offset_minutes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.log_level, "warn");
        assert!(config.utc_offset_minutes.is_none());
    }
}
