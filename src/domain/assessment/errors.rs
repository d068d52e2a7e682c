//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::catalog::Area;
use crate::domain::foundation::ValidationError;

/// Errors raised while validating a submission before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The required display name / nickname is missing or blank.
    #[error("Please enter a name or nickname")]
    MissingNickname,

    /// An area's responses were missing or had the wrong count.
    #[error("Area '{area}' expects {expected} responses, got {actual}")]
    IncompleteResponses {
        area: Area,
        expected: usize,
        actual: usize,
    },

    /// A response value failed rating validation.
    #[error(transparent)]
    InvalidRating(#[from] ValidationError),
}
