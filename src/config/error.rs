//! Configuration error types.

use thiserror::Error;

/// Errors that occur while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    ReadFailed(#[from] config::ConfigError),
}

/// Errors that occur during semantic validation of loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Admin PIN must be exactly 4 digits")]
    InvalidPin,

    #[error("Admin allow-list must contain at least one username")]
    EmptyAllowList,

    #[error("Sell rate must be between 0 and 100 percent")]
    InvalidSellRate,

    #[error("Starting budget must be positive")]
    InvalidBudget,

    #[error("Firestore project id is required when an API key is set")]
    IncompleteFirestoreConfig,
}
