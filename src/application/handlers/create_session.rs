//! CreateSessionHandler - Opens a fresh session in the intro phase.

use std::sync::Arc;

use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Session, SessionError> {
        let session = Session::new();
        self.store
            .insert(session.clone())
            .await
            .map_err(|e| SessionError::infrastructure(e.to_string()))?;

        tracing::info!(session_id = %session.id(), "session created");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::session::SessionPhase;

    #[tokio::test]
    async fn creates_a_session_in_the_intro_phase() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = CreateSessionHandler::new(store.clone());

        let session = handler.handle().await.unwrap();

        assert_eq!(session.phase(), SessionPhase::Intro);
        let stored = store.find(session.id()).await.unwrap().unwrap();
        assert_eq!(stored, session);
    }

    #[tokio::test]
    async fn each_call_creates_a_distinct_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = CreateSessionHandler::new(store.clone());

        let first = handler.handle().await.unwrap();
        let second = handler.handle().await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(store.session_count().await, 2);
    }
}
