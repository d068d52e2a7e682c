//! Theme and asset configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Brand colors handed to the results chart renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Main chart color (fill and outline)
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Secondary accent color
    #[serde(default = "default_secondary")]
    pub secondary: String,

    /// Highlight color
    #[serde(default = "default_accent")]
    pub accent: String,
}

impl ThemeConfig {
    /// Validate theme configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for color in [&self.primary, &self.secondary, &self.accent] {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidThemeColor(color.clone()));
            }
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            accent: default_accent(),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn default_primary() -> String {
    "#1f77b4".to_string()
}

fn default_secondary() -> String {
    "#ff7f0e".to_string()
}

fn default_accent() -> String {
    "#2ca02c".to_string()
}

/// Optional decorative assets.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Logo shown on the intro view; a missing file degrades to a warning
    /// banner, never an error.
    #[serde(default = "default_logo_path")]
    pub logo_path: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            logo_path: default_logo_path(),
        }
    }
}

fn default_logo_path() -> PathBuf {
    PathBuf::from("assets/logo.png")
}
