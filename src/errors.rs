//! Error types for the raffle engine and its console session
//!
//! Core violations (negative money, drawing from an empty container) are
//! programmer-contract errors and are surfaced, never retried.

use thiserror::Error;

/// Root error type for all raffle operations
#[derive(Debug, Error)]
pub enum RaffleError {
    /// A monetary amount or other argument broke its contract
    #[error("Invalid argument for {field}: '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    /// `draw` was called on a container with nothing left in it
    #[error("Cannot draw from an empty container")]
    EmptyContainer,

    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Console input/output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration and validation errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),
}

impl From<toml::de::Error> for ConfigurationError {
    fn from(e: toml::de::Error) -> Self {
        ConfigurationError::LoadFailed(format!("Failed to parse TOML: {}", e))
    }
}

impl RaffleError {
    /// Rejection of a negative monetary amount
    pub fn negative_amount(field: &str, value: i64) -> Self {
        RaffleError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: "amount must not be negative".to_string(),
        }
    }
}

// Convenience type alias for Results
pub type RaffleResult<T> = Result<T, RaffleError>;
