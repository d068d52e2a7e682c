//! In-Memory Record Sink Adapter
//!
//! Collects appended rows in memory. Used when no spreadsheet is
//! configured, and by tests asserting row layout and failure policy.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::domain::assessment::SubmissionRecord;
use crate::ports::{RecordSink, SinkError};

/// In-memory sink that records every appended row.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSink {
    rows: Arc<Mutex<Vec<Vec<String>>>>,
}

impl InMemoryRecordSink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows appended so far, in arrival order.
    pub fn appended_rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().expect("sink mutex poisoned").clone()
    }

    /// Number of rows appended so far.
    pub fn row_count(&self) -> usize {
        self.rows.lock().expect("sink mutex poisoned").len()
    }
}

#[async_trait]
impl RecordSink for InMemoryRecordSink {
    async fn append(&self, record: &SubmissionRecord) -> Result<(), SinkError> {
        self.rows
            .lock()
            .map_err(|e| SinkError::Unavailable(e.to_string()))?
            .push(record.to_row());
        Ok(())
    }
}
