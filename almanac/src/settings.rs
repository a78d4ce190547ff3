//! Engine configuration.
//!
//! [`Settings`] is a plain value: each [`crate::Almanac`] owns its own copy,
//! so two dashboards with different week starts can coexist in one process.
//! Settings are read from TOML:
//!
//! ```toml
//! week_start = "monday"
//! default_country = "DE"
//! upcoming_count = 3
//! ```

use alm_core::errors::{Error, Result};
use alm_holidays::registry;
use alm_time::WeekStart;
use serde::{Deserialize, Serialize};

/// User-facing configuration of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// First column of month grids and weekday headers.
    pub week_start: WeekStart,
    /// Country used when the caller does not name one.
    pub default_country: String,
    /// Length of the upcoming-holidays list.
    pub upcoming_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            default_country: "US".to_owned(),
            upcoming_count: 5,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.  Missing keys take their
    /// default values; unknown keys are rejected.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        tracing::debug!(
            week_start = %settings.week_start,
            default_country = %settings.default_country,
            upcoming_count = settings.upcoming_count,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check every value, returning [`Error::Config`] on the first bad one.
    pub fn validate(&self) -> Result<()> {
        if self.upcoming_count == 0 {
            return Err(Error::Config("upcoming_count must be at least 1".into()));
        }
        let code = &self.default_country;
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::Config(format!(
                "default_country must be a two-letter country code, got {code:?}"
            )));
        }
        if registry::resolve(code).is_err() {
            return Err(Error::Config(format!(
                "default_country {code:?} is not a supported country"
            )));
        }
        Ok(())
    }

    /// Set the week start.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Set the default country.
    pub fn with_default_country(mut self, code: impl Into<String>) -> Self {
        self.default_country = code.into();
        self
    }

    /// Set the upcoming-holidays list length.
    pub fn with_upcoming_count(mut self, count: usize) -> Self {
        self.upcoming_count = count;
        self
    }
}
