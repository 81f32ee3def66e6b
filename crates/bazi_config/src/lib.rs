//! Engine configuration.
//!
//! Layers, lowest first: built-in defaults, an optional TOML file, then
//! `BAZI_*` environment variables.
//!
//! ```toml
//! [chart]
//! utc_offset_minutes = 480
//! zi_hour = "same_day"        # or "next_day"
//! day_anchor = "1900-01-31"
//!
//! [remote]
//! enabled = false
//! endpoint = "http://localhost:3000/api/bazi"
//! timeout_secs = 30
//!
//! [logging]
//! level = "info"
//! ```

pub mod error;

use std::path::Path;

use bazi_core::{ChartOptions, ZiHourPolicy};
use bazi_remote::RemoteConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use error::{ConfigError, ConfigResult};

/// Largest accepted civil UTC offset, in minutes (UTC+14).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaziConfig {
    pub chart: ChartOptions,
    pub remote: RemoteConfig,
    pub logging: LoggingConfig,
}

impl BaziConfig {
    /// Defaults, then `path` if given, then the process environment; validated.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        let config = config.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Apply `BAZI_*` variables from the process environment.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `BAZI_UTC_OFFSET_MINUTES` | `chart.utc_offset_minutes` |
    /// | `BAZI_ZI_HOUR` | `chart.zi_hour` (`same_day` / `next_day`) |
    /// | `BAZI_DAY_ANCHOR` | `chart.day_anchor` (`YYYY-MM-DD`) |
    /// | `BAZI_REMOTE_ENABLED` | `remote.enabled` |
    /// | `BAZI_REMOTE_ENDPOINT` | `remote.endpoint` |
    /// | `BAZI_REMOTE_TIMEOUT_SECS` | `remote.timeout_secs` |
    /// | `BAZI_LOG_LEVEL` | `logging.level` |
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::with_env_overrides`] with an explicit lookup.
    /// Unparseable values are errors rather than silently ignored.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        if let Some(v) = lookup("BAZI_UTC_OFFSET_MINUTES") {
            self.chart.utc_offset_minutes = parse("BAZI_UTC_OFFSET_MINUTES", &v)?;
        }
        if let Some(v) = lookup("BAZI_ZI_HOUR") {
            self.chart.zi_hour = match v.trim() {
                "same_day" => ZiHourPolicy::SameDay,
                "next_day" => ZiHourPolicy::NextDay,
                other => {
                    return Err(ConfigError::invalid(
                        "BAZI_ZI_HOUR",
                        format!("expected same_day or next_day, got {other:?}"),
                    ));
                }
            };
        }
        if let Some(v) = lookup("BAZI_DAY_ANCHOR") {
            self.chart.day_anchor = NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                .map_err(|e| ConfigError::invalid("BAZI_DAY_ANCHOR", e.to_string()))?;
        }
        if let Some(v) = lookup("BAZI_REMOTE_ENABLED") {
            self.remote.enabled = parse("BAZI_REMOTE_ENABLED", &v)?;
        }
        if let Some(v) = lookup("BAZI_REMOTE_ENDPOINT") {
            self.remote.endpoint = Some(v.trim().to_owned()).filter(|e| !e.is_empty());
        }
        if let Some(v) = lookup("BAZI_REMOTE_TIMEOUT_SECS") {
            self.remote.timeout_secs = parse("BAZI_REMOTE_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = lookup("BAZI_LOG_LEVEL") {
            self.logging.level = v.trim().to_owned();
        }
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let offset = self.chart.utc_offset_minutes;
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&offset) {
            return Err(ConfigError::invalid(
                "chart.utc_offset_minutes",
                format!("{offset} not in ±{MAX_UTC_OFFSET_MINUTES}"),
            ));
        }
        self.remote
            .validate()
            .map_err(|e| ConfigError::invalid("remote", e.to_string()))?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level", "must not be empty"));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(key, format!("{value:?}: {e}")))
}
