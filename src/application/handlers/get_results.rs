//! GetResultsHandler - Assembles the results view data.

use std::sync::Arc;

use crate::domain::assessment::{select_feedback, ScoreCard};
use crate::domain::catalog::{Area, FeedbackEntry};
use crate::domain::chart::RadarChart;
use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionError, SessionPhase};
use crate::ports::SessionStore;

/// Everything the results view renders: the score profile, the radar
/// polygon, and zero or more feedback panels.
#[derive(Debug, Clone)]
pub struct ResultsData {
    pub score_card: ScoreCard,
    pub chart: RadarChart,
    pub feedback: Vec<(Area, &'static FeedbackEntry)>,
    pub sink_warning: Option<String>,
}

/// Handler for reading a session's results.
pub struct GetResultsHandler {
    store: Arc<dyn SessionStore>,
}

impl GetResultsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<ResultsData, SessionError> {
        let session = self
            .store
            .find(&session_id)
            .await
            .map_err(|e| SessionError::infrastructure(e.to_string()))?
            .ok_or(SessionError::NotFound(session_id))?;

        let outcome = match session.outcome() {
            Some(outcome) if session.phase() == SessionPhase::Results => outcome,
            _ => {
                return Err(SessionError::InvalidPhase {
                    from: session.phase(),
                    to: SessionPhase::Results,
                })
            }
        };

        Ok(ResultsData {
            score_card: outcome.score_card,
            chart: RadarChart::build(&outcome.score_card),
            feedback: select_feedback(&outcome.score_card),
            sink_warning: outcome.sink_warning.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::domain::assessment::ResponseSheet;
    use crate::domain::foundation::{LikertRating, SubmissionId};
    use crate::domain::session::{AssessmentOutcome, Session};
    use std::collections::HashMap;

    async fn completed_session(
        store: &InMemorySessionStore,
        sheet: ResponseSheet,
        warning: Option<&str>,
    ) -> SessionId {
        let mut session = Session::new();
        session.start().unwrap();
        session
            .complete(AssessmentOutcome {
                score_card: ScoreCard::compute(&sheet),
                submission_id: SubmissionId::generate(),
                sink_warning: warning.map(String::from),
            })
            .unwrap();
        let id = *session.id();
        store.insert(session).await.unwrap();
        id
    }

    #[tokio::test]
    async fn results_bundle_scores_chart_and_feedback() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetResultsHandler::new(store.clone());
        let id = completed_session(
            &store,
            ResponseSheet::uniform(LikertRating::Fair),
            None,
        )
        .await;

        let results = handler.handle(id).await.unwrap();

        assert_eq!(results.score_card.total(), 36);
        assert_eq!(results.chart.polygon().len(), Area::COUNT + 1);
        // All areas score 9 < 11, so every panel appears.
        assert_eq!(results.feedback.len(), Area::COUNT);
        assert!(results.sink_warning.is_none());
    }

    #[tokio::test]
    async fn top_scores_produce_no_feedback_panels() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetResultsHandler::new(store.clone());
        let id = completed_session(
            &store,
            ResponseSheet::uniform(LikertRating::Excellent),
            None,
        )
        .await;

        let results = handler.handle(id).await.unwrap();
        assert_eq!(results.score_card.total(), 72);
        assert!(results.feedback.is_empty());
    }

    #[tokio::test]
    async fn mixed_profile_flags_only_weak_areas() {
        let values: HashMap<Area, Vec<u8>> = vec![
            (Area::ActiveListening, vec![6, 6, 6]),
            (Area::EmpathyAndComposure, vec![1, 1, 1]),
            (Area::QuestionCraft, vec![1, 1, 1]),
            (Area::FairJudgement, vec![1, 1, 1]),
        ]
        .into_iter()
        .collect();
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetResultsHandler::new(store.clone());
        let id = completed_session(
            &store,
            ResponseSheet::from_values(&values).unwrap(),
            None,
        )
        .await;

        let results = handler.handle(id).await.unwrap();
        assert_eq!(results.score_card.total(), 27);
        let flagged: Vec<Area> = results.feedback.iter().map(|(a, _)| *a).collect();
        assert_eq!(
            flagged,
            vec![
                Area::EmpathyAndComposure,
                Area::QuestionCraft,
                Area::FairJudgement
            ]
        );
    }

    #[tokio::test]
    async fn sink_warning_travels_to_the_view() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetResultsHandler::new(store.clone());
        let id = completed_session(
            &store,
            ResponseSheet::uniform(LikertRating::Good),
            Some("storage offline"),
        )
        .await;

        let results = handler.handle(id).await.unwrap();
        assert_eq!(results.sink_warning.as_deref(), Some("storage offline"));
    }

    #[tokio::test]
    async fn results_before_submission_are_rejected() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetResultsHandler::new(store.clone());
        let session = Session::new();
        let id = *session.id();
        store.insert(session).await.unwrap();

        let result = handler.handle(id).await;
        assert!(matches!(result, Err(SessionError::InvalidPhase { .. })));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = GetResultsHandler::new(store);
        let missing = SessionId::new();
        assert_eq!(
            handler.handle(missing).await.unwrap_err(),
            SessionError::NotFound(missing)
        );
    }
}
