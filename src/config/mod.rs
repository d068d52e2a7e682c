//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `INTERVIEW_COMPASS` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use interview_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod sheets;
mod theme;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use sheets::SheetsConfig;
pub use theme::{AssetConfig, ThemeConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Google Sheets sink configuration; absent means submissions are kept
    /// in memory only
    #[serde(default)]
    pub sheets: Option<SheetsConfig>,

    /// Brand colors for the results chart
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Decorative assets (logo)
    #[serde(default)]
    pub assets: AssetConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INTERVIEW_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INTERVIEW_COMPASS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `INTERVIEW_COMPASS__SHEETS__SPREADSHEET_ID=...` -> `sheets.spreadsheet_id = ...`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INTERVIEW_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(sheets) = &self.sheets {
            sheets.validate()?;
        }
        self.theme.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
