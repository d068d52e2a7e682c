//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordSink` - best-effort append of one submission row
//! - `SessionStore` - session persistence between requests

mod record_sink;
mod session_store;

pub use record_sink::{RecordSink, SinkError};
pub use session_store::{SessionStore, StoreError};
