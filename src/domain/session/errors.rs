//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::SessionId;

use super::SessionPhase;

/// Errors raised by session lookups and phase transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session exists for the given id.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// The requested action is not valid in the session's current phase.
    #[error("Cannot move from {from} to {to}")]
    InvalidPhase {
        from: SessionPhase,
        to: SessionPhase,
    },

    /// The session store failed.
    #[error("Session store error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_session() {
        let id = SessionId::new();
        let err = SessionError::NotFound(id);
        assert_eq!(format!("{}", err), format!("Session not found: {}", id));
    }

    #[test]
    fn invalid_phase_names_both_ends() {
        let err = SessionError::InvalidPhase {
            from: SessionPhase::Intro,
            to: SessionPhase::Results,
        };
        assert_eq!(format!("{}", err), "Cannot move from intro to results");
    }
}
