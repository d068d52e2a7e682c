//! The response sheet: one rating per question, fixed shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Area, QUESTIONS_PER_AREA};
use crate::domain::foundation::LikertRating;

use super::AssessmentError;

/// One rating for every question in the bank, keyed structurally by
/// (area, question index).
///
/// The shape is fixed at compile time: a sheet cannot exist with a missing
/// cell, an extra cell, or an out-of-range value. All validation happens in
/// [`ResponseSheet::from_values`]; the scoring engine downstream never
/// re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSheet {
    cells: [[LikertRating; QUESTIONS_PER_AREA]; Area::COUNT],
}

impl ResponseSheet {
    /// Builds a sheet from already-typed ratings.
    pub fn new(cells: [[LikertRating; QUESTIONS_PER_AREA]; Area::COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a sheet where every question has the same rating.
    pub fn uniform(rating: LikertRating) -> Self {
        Self {
            cells: [[rating; QUESTIONS_PER_AREA]; Area::COUNT],
        }
    }

    /// Validates raw integer responses into a sheet.
    ///
    /// Requires exactly one value per question for every area; unknown area
    /// keys are already rejected during deserialization of [`Area`].
    pub fn from_values(values: &HashMap<Area, Vec<u8>>) -> Result<Self, AssessmentError> {
        let mut cells = [[LikertRating::default(); QUESTIONS_PER_AREA]; Area::COUNT];
        for area in Area::ALL {
            let raw = values.get(&area).map(Vec::as_slice).unwrap_or(&[]);
            if raw.len() != QUESTIONS_PER_AREA {
                return Err(AssessmentError::IncompleteResponses {
                    area,
                    expected: QUESTIONS_PER_AREA,
                    actual: raw.len(),
                });
            }
            for (index, value) in raw.iter().enumerate() {
                cells[area.index()][index] = LikertRating::try_from_u8(*value)?;
            }
        }
        Ok(Self { cells })
    }

    /// The rating for one (area, question index) cell.
    pub fn rating(&self, area: Area, index: usize) -> LikertRating {
        self.cells[area.index()][index]
    }

    /// All ratings for one area, in question order.
    pub fn area_ratings(&self, area: Area) -> &[LikertRating; QUESTIONS_PER_AREA] {
        &self.cells[area.index()]
    }

    /// Every cell in canonical (area, question index) order.
    pub fn iter(&self) -> impl Iterator<Item = (Area, usize, LikertRating)> + '_ {
        Area::ALL.into_iter().flat_map(move |area| {
            self.cells[area.index()]
                .into_iter()
                .enumerate()
                .map(move |(index, rating)| (area, index, rating))
        })
    }
}
