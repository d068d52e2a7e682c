//! HTTP routes for the assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_session, get_results, restart_session, start_questionnaire, submit_assessment,
    AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(create_session))
        .route("/:id/start", post(start_questionnaire))
        .route("/:id/submit", post(submit_assessment))
        .route("/:id/results", get(get_results))
        .route("/:id/restart", post(restart_session))
        .with_state(handlers)
}
