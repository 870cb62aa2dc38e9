//! CLI configuration management
//!
//! Loads the curve definition and log level from a TOML file, then applies
//! environment and command-line overrides.
//!
//! ```toml
//! log_level = "info"
//!
//! [curve]
//! valuation_date = "2024-01-01"
//! day_count = "ACT/365"
//!
//! [[curve.base]]
//! date = "2025-01-01"
//! rate = 0.03
//!
//! [[curve.spread]]
//! date = "2025-01-01"
//! rate = 0.008
//! ```

use std::path::Path;
use std::str::FromStr;

use curve_core::market_data::curves::{CurveBuilder, RatePoint, RatePoints};
use curve_core::market_data::CurveError;
use curve_core::types::{Date, DayCountConvention};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the file's log level.
pub const LOG_LEVEL_ENV: &str = "FUNDING_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Curve section is structurally invalid.
    #[error("Invalid curve definition: {0}")]
    InvalidCurve(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace
    Trace,
    /// Debug
    Debug,
    /// Info
    #[default]
    Info,
    /// Warn
    Warn,
    /// Error
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Curve definition: valuation date, convention and quoted points.
#[derive(Debug, Clone, Deserialize)]
pub struct CurveConfig {
    /// Valuation date of the year-fraction axis
    pub valuation_date: Date,
    /// Day count convention (defaults to ACT/365)
    #[serde(default)]
    pub day_count: DayCountConvention,
    /// Base (OIS) rate points
    pub base: Vec<RatePoint>,
    /// Credit spread points; empty means no spread
    #[serde(default)]
    pub spread: Vec<RatePoint>,
}

impl CurveConfig {
    /// Check the definition before any curve is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base.is_empty() {
            return Err(ConfigError::InvalidCurve(
                "at least one [[curve.base]] point is required".to_string(),
            ));
        }

        let legs = [("base", &self.base), ("spread", &self.spread)];
        for (leg, points) in legs {
            if let Some(p) = points.iter().find(|p| !p.rate.is_finite()) {
                return Err(ConfigError::InvalidCurve(format!(
                    "{leg} rate for {} is not finite",
                    p.date
                )));
            }
        }

        Ok(())
    }

    /// Curve builder over the configured points.
    ///
    /// Fails with `CurveError::DuplicateDate` if a leg quotes a date twice.
    pub fn builder(&self) -> Result<CurveBuilder, CurveError> {
        let base = RatePoints::new(self.base.iter().copied())?;
        let builder = CurveBuilder::new(base, self.valuation_date).with_day_count(self.day_count);

        if self.spread.is_empty() {
            return Ok(builder);
        }
        let spread = RatePoints::new(self.spread.iter().copied())?;
        Ok(builder.with_spread(spread))
    }
}

/// Full CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level
    #[serde(default, deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Curve definition
    pub curve: CurveConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path`, then apply overrides.
    ///
    /// Priority (highest to lowest):
    /// 1. CLI `--log-level`
    /// 2. `FUNDING_LOG_LEVEL`
    /// 3. Config file
    /// 4. Default values
    pub fn load(path: &Path, cli_log_level: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        let env_log_level = std::env::var(LOG_LEVEL_ENV).ok();
        config.apply_log_level_overrides(env_log_level.as_deref(), cli_log_level)?;
        Ok(config)
    }

    /// Apply environment then CLI log level overrides (CLI wins).
    pub fn apply_log_level_overrides(
        &mut self,
        env: Option<&str>,
        cli: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(level) = env {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(level) = cli {
            self.log_level = LogLevel::from_str(level)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.curve.validate()
    }
}
