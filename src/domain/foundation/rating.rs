//! Likert rating value object (1 to 6 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Six-point Likert self-rating: 1 (very poor) to 6 (excellent).
///
/// The default is the scale midpoint, matching the questionnaire's initial
/// slider position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LikertRating {
    VeryPoor = 1,
    Poor = 2,
    #[default]
    Fair = 3,
    Good = 4,
    VeryGood = 5,
    Excellent = 6,
}

impl LikertRating {
    /// Lowest value on the scale.
    pub const MIN: u8 = 1;

    /// Highest value on the scale.
    pub const MAX: u8 = 6;

    /// Creates a LikertRating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(LikertRating::VeryPoor),
            2 => Ok(LikertRating::Poor),
            3 => Ok(LikertRating::Fair),
            4 => Ok(LikertRating::Good),
            5 => Ok(LikertRating::VeryGood),
            6 => Ok(LikertRating::Excellent),
            _ => Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertRating::VeryPoor => "Very Poor",
            LikertRating::Poor => "Poor",
            LikertRating::Fair => "Fair",
            LikertRating::Good => "Good",
            LikertRating::VeryGood => "Very Good",
            LikertRating::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for LikertRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
