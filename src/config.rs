//! Configuration management with validation and defaults
//!
//! Settings come from an optional TOML file, then `RAFFLE_*` environment
//! variables, then command-line flags (applied by the binary).

use crate::errors::{ConfigurationError, RaffleResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Complete raffle configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RaffleConfig {
    pub raffle: RaffleSettings,
    pub draw: DrawConfig,
    pub monitoring: MonitoringConfig,
}

/// What is being raffled and how tickets are priced
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RaffleSettings {
    pub title: String,
    /// Price of one ticket; prompted for at start-up when absent
    pub ticket_price: Option<u64>,
    pub currency_symbol: String,
}

impl Default for RaffleSettings {
    fn default() -> Self {
        Self {
            title: "Cancer Research".to_string(),
            ticket_price: None,
            currency_symbol: "£".to_string(),
        }
    }
}

/// Lucky draw behaviour
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DrawConfig {
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MonitoringConfig {
    pub log_level: LogLevel,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ConfigurationError::InvalidValue {
                field: "log_level".to_string(),
                value: s.to_string(),
                reason: "expected one of error, warn, info, debug, trace".to_string(),
            }),
        }
    }
}

impl RaffleConfig {
    /// Validate configuration for logical consistency
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.raffle.title.trim().is_empty() {
            return Err(ConfigurationError::ValidationFailed(
                "raffle.title must not be empty".to_string(),
            ));
        }

        if self.raffle.currency_symbol.is_empty() {
            return Err(ConfigurationError::ValidationFailed(
                "raffle.currency_symbol must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration loader with environment variable support
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> RaffleResult<RaffleConfig> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with a custom variable lookup
    pub fn load_with<F>(&self, lookup: F) -> RaffleResult<RaffleConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.config_path {
            Some(ref path) => Self::load_from_file(path)?,
            None => RaffleConfig::default(),
        };

        apply_overrides(&mut config, lookup)?;
        config.validate()?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<RaffleConfig, ConfigurationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::LoadFailed(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(toml::from_str(&content)?)
    }
}

fn apply_overrides<F>(config: &mut RaffleConfig, lookup: F) -> Result<(), ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(title) = lookup("RAFFLE_TITLE") {
        config.raffle.title = title;
    }
    if let Some(price) = lookup("RAFFLE_TICKET_PRICE") {
        config.raffle.ticket_price = Some(parse_var("RAFFLE_TICKET_PRICE", &price, "Invalid ticket price")?);
    }
    if let Some(symbol) = lookup("RAFFLE_CURRENCY_SYMBOL") {
        config.raffle.currency_symbol = symbol;
    }
    if let Some(seed) = lookup("RAFFLE_SEED") {
        if !seed.is_empty() {
            config.draw.seed = Some(parse_var("RAFFLE_SEED", &seed, "Invalid seed")?);
        }
    }
    if let Some(level) = lookup("RAFFLE_LOG_LEVEL") {
        config.monitoring.log_level = level.parse()?;
    }
    Ok(())
}

fn parse_var(field: &str, value: &str, reason: &str) -> Result<u64, ConfigurationError> {
    value.trim().parse().map_err(|_| ConfigurationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RaffleError;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RaffleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.raffle.currency_symbol, "£");
        assert_eq!(config.draw.seed, None);
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut config = RaffleConfig::default();
        config.raffle.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[raffle]
title = "Animal Shelter"
ticket_price = 2

[draw]
seed = 42

[monitoring]
log_level = "debug"
"#
        )
        .unwrap();

        let config = ConfigLoader::new().with_path(file.path()).load_with(vars(&[])).unwrap();

        assert_eq!(config.raffle.title, "Animal Shelter");
        assert_eq!(config.raffle.ticket_price, Some(2));
        assert_eq!(config.raffle.currency_symbol, "£");
        assert_eq!(config.draw.seed, Some(42));
        assert_eq!(config.monitoring.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[raffle]\ntitle = \"From file\"").unwrap();

        let config = ConfigLoader::new()
            .with_path(file.path())
            .load_with(vars(&[
                ("RAFFLE_TITLE", "From env"),
                ("RAFFLE_TICKET_PRICE", "3"),
                ("RAFFLE_CURRENCY_SYMBOL", "$"),
                ("RAFFLE_LOG_LEVEL", "TRACE"),
            ]))
            .unwrap();

        assert_eq!(config.raffle.title, "From env");
        assert_eq!(config.raffle.ticket_price, Some(3));
        assert_eq!(config.raffle.currency_symbol, "$");
        assert_eq!(config.monitoring.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_invalid_env_value_is_reported() {
        let err = ConfigLoader::new()
            .load_with(vars(&[("RAFFLE_SEED", "not-a-number")]))
            .unwrap_err();

        match err {
            RaffleError::Configuration(ConfigurationError::InvalidValue { field, .. }) => {
                assert_eq!(field, "RAFFLE_SEED");
            }
            other => panic!("Expected invalid value error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_fails_to_load() {
        let err = ConfigLoader::new()
            .with_path("/definitely/not/here/raffle.toml")
            .load_with(vars(&[]))
            .unwrap_err();

        assert!(matches!(
            err,
            RaffleError::Configuration(ConfigurationError::LoadFailed(_))
        ));
    }
}
