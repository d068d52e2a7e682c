//! SessionStore port - Interface for keeping sessions between requests.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SessionId;
use crate::domain::session::Session;

/// Errors raised by a session store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for session persistence across the request/response flow.
///
/// Sessions are isolated from each other; there are no concurrent writers
/// within one session, so implementations only need whole-session
/// replacement semantics.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a newly created session.
    async fn insert(&self, session: Session) -> Result<(), StoreError>;

    /// Fetch a session by id, or None if unknown.
    async fn find(&self, id: &SessionId) -> Result<Option<Session>, StoreError>;

    /// Replace a stored session with its updated state.
    async fn update(&self, session: &Session) -> Result<(), StoreError>;

    /// Drop a session entirely.
    async fn remove(&self, id: &SessionId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe.
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SessionStore) {}

    #[test]
    fn store_error_renders_its_cause() {
        let err = StoreError::Unavailable("lock poisoned".into());
        assert_eq!(format!("{}", err), "session store unavailable: lock poisoned");
    }
}
