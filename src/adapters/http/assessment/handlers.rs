//! HTTP handlers for the assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    CreateSessionHandler, GetResultsHandler, RestartSessionHandler, StartQuestionnaireHandler,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitError,
};
use crate::config::{AssetConfig, ThemeConfig};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;

use super::dto::{
    CreateSessionResponse, ErrorResponse, IntroView, QuestionnaireView, RestartSessionResponse,
    ResultsResponse, StartQuestionnaireResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse,
};
use crate::domain::catalog::QuestionBank;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    create_handler: Arc<CreateSessionHandler>,
    start_handler: Arc<StartQuestionnaireHandler>,
    submit_handler: Arc<SubmitAssessmentHandler>,
    results_handler: Arc<GetResultsHandler>,
    restart_handler: Arc<RestartSessionHandler>,
    theme: ThemeConfig,
    assets: AssetConfig,
}

impl AssessmentHandlers {
    pub fn new(
        create_handler: Arc<CreateSessionHandler>,
        start_handler: Arc<StartQuestionnaireHandler>,
        submit_handler: Arc<SubmitAssessmentHandler>,
        results_handler: Arc<GetResultsHandler>,
        restart_handler: Arc<RestartSessionHandler>,
        theme: ThemeConfig,
        assets: AssetConfig,
    ) -> Self {
        Self {
            create_handler,
            start_handler,
            submit_handler,
            results_handler,
            restart_handler,
            theme,
            assets,
        }
    }

    /// Missing logo degrades to a warning banner, never an error.
    fn logo_warning(&self) -> Option<String> {
        let path = &self.assets.logo_path;
        if path.exists() {
            None
        } else {
            Some(format!(
                "Logo '{}' not found. Rendering continues without it.",
                path.display()
            ))
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Open a new session at the intro view
pub async fn create_session(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.create_handler.handle().await {
        Ok(session) => {
            let response = CreateSessionResponse {
                session_id: session.id().to_string(),
                phase: session.phase(),
                intro: IntroView::new(handlers.logo_warning()),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/start - Begin the questionnaire
pub async fn start_questionnaire(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.start_handler.handle(session_id).await {
        Ok(session) => {
            let response = StartQuestionnaireResponse {
                session_id: session.id().to_string(),
                phase: session.phase(),
                questionnaire: QuestionnaireView::new(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/submit - Score the questionnaire and store the row
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitAssessmentCommand {
        session_id,
        nickname: req.nickname,
        demographics: req.demographics,
        responses: req.responses,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(outcome) => {
            let response = SubmitAssessmentResponse {
                session_id: session_id.to_string(),
                phase: crate::domain::session::SessionPhase::Results,
                total_score: outcome.score_card.total(),
                max_total_score: QuestionBank::max_total_score(),
                persistence_warning: outcome.sink_warning,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(SubmitError::Session(e)) => handle_session_error(e),
        Err(SubmitError::Assessment(e)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
    }
}

/// GET /api/sessions/:id/results - Scores, radar chart, and feedback panels
pub async fn get_results(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.results_handler.handle(session_id).await {
        Ok(results) => {
            let response = ResultsResponse::from_results(&results, &handlers.theme);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/restart - Back to the intro, discarding results
pub async fn restart_session(
    State(handlers): State<AssessmentHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.restart_handler.handle(session_id).await {
        Ok(session) => (
            StatusCode::OK,
            Json(RestartSessionResponse::from_session(&session)),
        )
            .into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        SessionError::InvalidPhase { .. } => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(error.to_string())),
        )
            .into_response(),
        SessionError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
