//! Spreadsheet sink configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Google Sheets configuration.
///
/// The whole section is optional: without it the service falls back to the
/// in-memory sink and submissions are not durably stored. Credentials are
/// supplied out-of-band as a ready-to-use bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet id from the sheet URL
    pub spreadsheet_id: String,

    /// Worksheet (tab) receiving appended rows
    #[serde(default = "default_worksheet")]
    pub worksheet: String,

    /// OAuth bearer token for the Sheets API
    pub access_token: Secret<String>,
}

impl SheetsConfig {
    /// Validate sheets configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(ValidationError::EmptySpreadsheetId);
        }
        if self.worksheet.trim().is_empty() {
            return Err(ValidationError::EmptyWorksheet);
        }
        if self.access_token.expose_secret().trim().is_empty() {
            return Err(ValidationError::EmptyAccessToken);
        }
        Ok(())
    }
}

fn default_worksheet() -> String {
    "Sheet1".to_string()
}
