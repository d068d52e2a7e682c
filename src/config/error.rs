//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Spreadsheet id cannot be empty")]
    EmptySpreadsheetId,

    #[error("Worksheet name cannot be empty")]
    EmptyWorksheet,

    #[error("Sheets access token cannot be empty")]
    EmptyAccessToken,

    #[error("Invalid theme color '{0}': expected #RRGGBB")]
    InvalidThemeColor(String),
}
