//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod create_session;
mod get_results;
mod restart_session;
mod start_questionnaire;
mod submit_assessment;

pub use create_session::CreateSessionHandler;
pub use get_results::{GetResultsHandler, ResultsData};
pub use restart_session::RestartSessionHandler;
pub use start_questionnaire::StartQuestionnaireHandler;
pub use submit_assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitError};
