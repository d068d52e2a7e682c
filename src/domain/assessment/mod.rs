//! Assessment module - Responses, demographics, scoring, and submission.

mod demographics;
mod errors;
mod responses;
mod scoring;
mod submission;

pub use demographics::{AgeBracket, Demographics, EducationLevel, Gender, JobCategory};
pub use errors::AssessmentError;
pub use responses::ResponseSheet;
pub use scoring::{select_feedback, ScoreCard};
pub use submission::SubmissionRecord;
