//! Configuration error types

use thiserror::Error;

use crate::ports::table::InventoryError;

/// Errors that can occur while loading configuration or wiring backends
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Inventory backend unavailable: {0}")]
    Inventory(#[from] InventoryError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Lookup timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Ticket prefix must be non-empty ASCII alphanumeric")]
    InvalidTicketPrefix,
}
