//! Google Sheets sink adapter.
//!
//! Appends one row per completed submission through the Sheets REST API.
//! Authentication is out-of-band: the configuration supplies a ready
//! bearer token. Failures map to `SinkError` and are handled upstream as
//! non-fatal warnings.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::config::SheetsConfig;
use crate::domain::assessment::SubmissionRecord;
use crate::ports::{RecordSink, SinkError};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Record sink backed by the Google Sheets `values:append` endpoint.
pub struct GoogleSheetsSink {
    http: reqwest::Client,
    config: SheetsConfig,
    base_url: String,
}

impl GoogleSheetsSink {
    /// Create a sink for the configured spreadsheet.
    pub fn new(config: SheetsConfig) -> Self {
        Self::with_base_url(config, SHEETS_API_BASE.to_string())
    }

    /// Create a sink against a custom API base. Exposed for tests that
    /// point the sink at a local server.
    pub fn with_base_url(config: SheetsConfig, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            base_url,
        }
    }

    fn append_url(&self) -> String {
        format!(
            "{}/{}/values/{}:append",
            self.base_url, self.config.spreadsheet_id, self.config.worksheet
        )
    }
}

#[async_trait]
impl RecordSink for GoogleSheetsSink {
    async fn append(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        let body = json!({ "values": [record.to_row()] });

        let response = self
            .http
            .post(self.append_url())
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(self.config.access_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| SinkError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected(format!("HTTP {}: {}", status, detail)));
        }

        tracing::debug!(submission_id = %record.id(), "appended submission row");
        Ok(())
    }
}
