//! Competency areas measured by the questionnaire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named competency dimension grouping related questions.
///
/// The variant order here is the canonical order: the question bank, the
/// feedback table, score cards, and the radar chart all iterate areas in
/// exactly this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    ActiveListening,
    EmpathyAndComposure,
    QuestionCraft,
    FairJudgement,
}

impl Area {
    /// Number of competency areas.
    pub const COUNT: usize = 4;

    /// All areas in canonical order.
    pub const ALL: [Area; Area::COUNT] = [
        Area::ActiveListening,
        Area::EmpathyAndComposure,
        Area::QuestionCraft,
        Area::FairJudgement,
    ];

    /// Position of this area in the canonical order.
    pub fn index(&self) -> usize {
        match self {
            Area::ActiveListening => 0,
            Area::EmpathyAndComposure => 1,
            Area::QuestionCraft => 2,
            Area::FairJudgement => 3,
        }
    }

    /// Human-readable name shown on questionnaire sections and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Area::ActiveListening => "Active Listening",
            Area::EmpathyAndComposure => "Empathy and Composure",
            Area::QuestionCraft => "Question Craft",
            Area::FairJudgement => "Fair Judgement",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
