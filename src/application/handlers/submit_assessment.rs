//! SubmitAssessmentHandler - The gated scoring and persistence flow.
//!
//! Order matters here: the nickname gate runs before any scoring or
//! persistence, and a sink failure is demoted to a warning so the
//! respondent never loses their results over a storage blip.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::assessment::{
    AssessmentError, Demographics, ResponseSheet, ScoreCard, SubmissionRecord,
};
use crate::domain::catalog::Area;
use crate::domain::foundation::{SessionId, SubmissionId};
use crate::domain::session::{AssessmentOutcome, SessionError, SessionPhase};
use crate::ports::{RecordSink, SessionStore};

/// Command to submit a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub session_id: SessionId,
    /// Display name or nickname. Gates the submission; never persisted.
    pub nickname: String,
    pub demographics: Demographics,
    /// Raw responses keyed by area, one value per question in order.
    pub responses: HashMap<Area, Vec<u8>>,
}

/// Errors from the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// Handler for submitting assessments.
pub struct SubmitAssessmentHandler {
    store: Arc<dyn SessionStore>,
    sink: Arc<dyn RecordSink>,
}

impl SubmitAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>, sink: Arc<dyn RecordSink>) -> Self {
        Self { store, sink }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<AssessmentOutcome, SubmitError> {
        // 1. The session must exist and be mid-questionnaire.
        let mut session = self
            .store
            .find(&cmd.session_id)
            .await
            .map_err(|e| SessionError::infrastructure(e.to_string()))?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        if session.phase() != SessionPhase::Questionnaire {
            return Err(SessionError::InvalidPhase {
                from: session.phase(),
                to: SessionPhase::Results,
            }
            .into());
        }

        // 2. Gate: no scoring and no persistence without a nickname.
        if cmd.nickname.trim().is_empty() {
            return Err(AssessmentError::MissingNickname.into());
        }

        // 3. Validate and score.
        let sheet = ResponseSheet::from_values(&cmd.responses)?;
        let score_card = ScoreCard::compute(&sheet);

        // 4. Best-effort, at-most-once append. Failure becomes a warning.
        let submission_id = SubmissionId::generate();
        let record = SubmissionRecord::new(submission_id.clone(), cmd.demographics, sheet);
        let sink_warning = match self.sink.append(&record).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    submission_id = %submission_id,
                    error = %e,
                    "failed to store submission; results proceed"
                );
                Some(format!(
                    "Your results could not be stored ({}). The feedback below is still complete.",
                    e
                ))
            }
        };

        // 5. Record the outcome and move to results.
        let outcome = AssessmentOutcome {
            score_card,
            submission_id,
            sink_warning,
        };
        session.complete(outcome.clone())?;
        self.store
            .update(&session)
            .await
            .map_err(|e| SessionError::infrastructure(e.to_string()))?;

        tracing::info!(
            session_id = %session.id(),
            total = outcome.score_card.total(),
            "assessment submitted"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryRecordSink, InMemorySessionStore};
    use crate::domain::assessment::{AgeBracket, EducationLevel, Gender, JobCategory};
    use crate::domain::catalog::QUESTIONS_PER_AREA;
    use crate::domain::session::Session;
    use crate::ports::SinkError;
    use async_trait::async_trait;

    struct FailingRecordSink;

    #[async_trait]
    impl RecordSink for FailingRecordSink {
        async fn append(&self, _record: &SubmissionRecord) -> Result<(), SinkError> {
            Err(SinkError::Unavailable("simulated outage".to_string()))
        }
    }

    fn demographics() -> Demographics {
        Demographics {
            gender: Gender::Male,
            age_bracket: AgeBracket::From31To40,
            education: EducationLevel::MastersDegree,
            job: JobCategory::MiddleManager,
        }
    }

    fn responses_of(value: u8) -> HashMap<Area, Vec<u8>> {
        Area::ALL
            .into_iter()
            .map(|area| (area, vec![value; QUESTIONS_PER_AREA]))
            .collect()
    }

    fn command(session_id: SessionId, nickname: &str, value: u8) -> SubmitAssessmentCommand {
        SubmitAssessmentCommand {
            session_id,
            nickname: nickname.to_string(),
            demographics: demographics(),
            responses: responses_of(value),
        }
    }

    async fn questionnaire_session(store: &InMemorySessionStore) -> SessionId {
        let mut session = Session::new();
        session.start().unwrap();
        let id = *session.id();
        store.insert(session).await.unwrap();
        id
    }

    #[tokio::test]
    async fn scores_persist_and_move_to_results() {
        let store = Arc::new(InMemorySessionStore::new());
        let sink = Arc::new(InMemoryRecordSink::new());
        let handler = SubmitAssessmentHandler::new(store.clone(), sink.clone());
        let id = questionnaire_session(&store).await;

        let outcome = handler.handle(command(id, "Dana", 3)).await.unwrap();

        assert_eq!(outcome.score_card.total(), 36);
        assert!(outcome.sink_warning.is_none());
        assert_eq!(sink.row_count(), 1);

        let session = store.find(&id).await.unwrap().unwrap();
        assert_eq!(session.phase(), SessionPhase::Results);
        assert_eq!(session.outcome().unwrap(), &outcome);
    }

    #[tokio::test]
    async fn appended_row_follows_the_record_layout() {
        let store = Arc::new(InMemorySessionStore::new());
        let sink = Arc::new(InMemoryRecordSink::new());
        let handler = SubmitAssessmentHandler::new(store.clone(), sink.clone());
        let id = questionnaire_session(&store).await;

        let outcome = handler.handle(command(id, "Dana", 5)).await.unwrap();

        let rows = sink.appended_rows();
        assert_eq!(rows[0][0], outcome.submission_id.to_string());
        assert_eq!(rows[0].len(), 5 + Area::COUNT * QUESTIONS_PER_AREA);
        // Nickname gates the submission but is never part of the row.
        assert!(!rows[0].iter().any(|cell| cell == "Dana"));
    }

    #[tokio::test]
    async fn blank_nickname_blocks_scoring_and_persistence() {
        let store = Arc::new(InMemorySessionStore::new());
        let sink = Arc::new(InMemoryRecordSink::new());
        let handler = SubmitAssessmentHandler::new(store.clone(), sink.clone());
        let id = questionnaire_session(&store).await;

        for nickname in ["", "   ", "\t"] {
            let result = handler.handle(command(id, nickname, 4)).await;
            assert_eq!(
                result.unwrap_err(),
                SubmitError::Assessment(AssessmentError::MissingNickname)
            );
        }

        assert_eq!(sink.row_count(), 0);
        let session = store.find(&id).await.unwrap().unwrap();
        assert_eq!(session.phase(), SessionPhase::Questionnaire);
        assert!(session.outcome().is_none());
    }

    #[tokio::test]
    async fn sink_failure_does_not_block_results() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SubmitAssessmentHandler::new(store.clone(), Arc::new(FailingRecordSink));
        let id = questionnaire_session(&store).await;

        let outcome = handler.handle(command(id, "Dana", 6)).await.unwrap();

        assert_eq!(outcome.score_card.total(), 72);
        let warning = outcome.sink_warning.expect("warning expected");
        assert!(warning.contains("could not be stored"));

        let session = store.find(&id).await.unwrap().unwrap();
        assert_eq!(session.phase(), SessionPhase::Results);
    }

    #[tokio::test]
    async fn incomplete_responses_are_rejected_before_persistence() {
        let store = Arc::new(InMemorySessionStore::new());
        let sink = Arc::new(InMemoryRecordSink::new());
        let handler = SubmitAssessmentHandler::new(store.clone(), sink.clone());
        let id = questionnaire_session(&store).await;

        let mut cmd = command(id, "Dana", 4);
        cmd.responses.remove(&Area::QuestionCraft);

        let result = handler.handle(cmd).await;
        assert!(matches!(
            result,
            Err(SubmitError::Assessment(
                AssessmentError::IncompleteResponses { .. }
            ))
        ));
        assert_eq!(sink.row_count(), 0);
    }

    #[tokio::test]
    async fn submission_outside_the_questionnaire_phase_is_rejected() {
        let store = Arc::new(InMemorySessionStore::new());
        let sink = Arc::new(InMemoryRecordSink::new());
        let handler = SubmitAssessmentHandler::new(store.clone(), sink.clone());

        let session = Session::new();
        let id = *session.id();
        store.insert(session).await.unwrap();

        let result = handler.handle(command(id, "Dana", 4)).await;
        assert!(matches!(
            result,
            Err(SubmitError::Session(SessionError::InvalidPhase { .. }))
        ));
        assert_eq!(sink.row_count(), 0);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler =
            SubmitAssessmentHandler::new(store, Arc::new(InMemoryRecordSink::new()));

        let missing = SessionId::new();
        let result = handler.handle(command(missing, "Dana", 4)).await;
        assert_eq!(
            result.unwrap_err(),
            SubmitError::Session(SessionError::NotFound(missing))
        );
    }
}
