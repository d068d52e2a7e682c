//! Assessment HTTP adapter - the REST surface of the questionnaire flow.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
