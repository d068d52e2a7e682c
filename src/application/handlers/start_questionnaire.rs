//! StartQuestionnaireHandler - Moves a session from intro to questionnaire.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Handler for the explicit start action. No side effects beyond the
/// phase transition.
pub struct StartQuestionnaireHandler {
    store: Arc<dyn SessionStore>,
}

impl StartQuestionnaireHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<Session, SessionError> {
        let mut session = self
            .store
            .find(&session_id)
            .await
            .map_err(|e| SessionError::infrastructure(e.to_string()))?
            .ok_or(SessionError::NotFound(session_id))?;

        session.start()?;

        self.store
            .update(&session)
            .await
            .map_err(|e| SessionError::infrastructure(e.to_string()))?;

        tracing::info!(session_id = %session.id(), "questionnaire started");
        Ok(session)
    }
}
