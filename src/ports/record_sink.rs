//! RecordSink port - Interface for durably storing submission rows.
//!
//! The sink is a capability injected into the submission handler so tests
//! can substitute a fake and assert the non-blocking failure policy.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::SubmissionRecord;

/// Errors raised by a record sink.
///
/// These never propagate past the submission handler: a sink failure is
/// converted to a one-time user-visible warning and the flow continues.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    /// The sink could not be reached (network, auth, outage).
    #[error("record sink unavailable: {0}")]
    Unavailable(String),

    /// The sink answered but refused the row (quota, bad range).
    #[error("record sink rejected the row: {0}")]
    Rejected(String),
}

/// Port for appending one submission row per completed assessment.
///
/// Implementations must treat `append` as at-most-once: no internal
/// retries, no background queues. One failure is reported once.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Append the record as one row, in the record's fixed column order.
    async fn append(&self, record: &SubmissionRecord) -> Result<(), SinkError>;
}
