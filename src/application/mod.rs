//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! the session store and the record sink.

pub mod handlers;

pub use handlers::{
    CreateSessionHandler, GetResultsHandler, RestartSessionHandler, ResultsData,
    StartQuestionnaireHandler, SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitError,
};
