//! Session domain module.
//!
//! The per-respondent assessment session: a three-phase state machine
//! (intro, questionnaire, results) plus the data each phase accumulates.

mod aggregate;
mod errors;
mod phase;

pub use aggregate::{AssessmentOutcome, Session};
pub use errors::SessionError;
pub use phase::SessionPhase;
