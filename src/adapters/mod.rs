//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST surface for the questionnaire flow (axum)
//! - `memory` - process-local session store and record sink
//! - `sheets` - Google Sheets record sink (reqwest)

pub mod http;
pub mod memory;
pub mod sheets;

pub use memory::{InMemoryRecordSink, InMemorySessionStore};
pub use sheets::GoogleSheetsSink;
