//! Scoring engine: per-area sums, grand total, improvement threshold.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{feedback_for, Area, FeedbackEntry, QuestionBank};

use super::ResponseSheet;

/// The computed score profile for one submission.
///
/// Scores are derived once at submission time and never recomputed; the
/// card is stored on the session for the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    area_scores: [u32; Area::COUNT],
    total: u32,
}

impl ScoreCard {
    /// Sums each area's responses in question order, then totals the areas.
    pub fn compute(sheet: &ResponseSheet) -> Self {
        let mut area_scores = [0u32; Area::COUNT];
        for area in Area::ALL {
            area_scores[area.index()] = sheet
                .area_ratings(area)
                .iter()
                .map(|r| r.value() as u32)
                .sum();
        }
        let total = area_scores.iter().sum();

        debug_assert!(area_scores
            .iter()
            .all(|s| (QuestionBank::min_area_score()..=QuestionBank::max_area_score())
                .contains(s)));
        debug_assert!(
            (QuestionBank::min_total_score()..=QuestionBank::max_total_score()).contains(&total)
        );

        Self { area_scores, total }
    }

    /// The summed score for one area.
    pub fn area_score(&self, area: Area) -> u32 {
        self.area_scores[area.index()]
    }

    /// The grand total across all areas.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Per-area scores in canonical order.
    pub fn scores(&self) -> impl Iterator<Item = (Area, u32)> + '_ {
        Area::ALL.into_iter().map(|a| (a, self.area_score(a)))
    }

    /// Score below which an area is flagged for improvement.
    ///
    /// 60% of the area maximum, rounded up: 11 of 18 in the reference
    /// configuration, matching the original assessment's cut-off.
    pub const fn improvement_threshold() -> u32 {
        (3 * QuestionBank::max_area_score() + 4) / 5
    }

    /// True when this area's score falls below the improvement threshold.
    pub fn needs_improvement(&self, area: Area) -> bool {
        self.area_score(area) < Self::improvement_threshold()
    }

    /// Areas flagged for improvement, in canonical order.
    pub fn areas_to_improve(&self) -> Vec<Area> {
        Area::ALL
            .into_iter()
            .filter(|a| self.needs_improvement(*a))
            .collect()
    }
}

/// Selects the feedback panels to render, in canonical area order.
///
/// An empty result means every area met the threshold and the caller shows
/// the congratulatory message instead.
pub fn select_feedback(card: &ScoreCard) -> Vec<(Area, &'static FeedbackEntry)> {
    card.areas_to_improve()
        .into_iter()
        .map(|area| (area, feedback_for(area)))
        .collect()
}
