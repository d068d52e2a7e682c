//! Static question bank: the prompts behind the assessment.
//!
//! The bank is fixed at compile time. Changing the assessment means
//! redeploying with a different table, not passing runtime input.

use crate::domain::foundation::LikertRating;

use super::Area;

/// Questions asked for each area, in presentation order.
pub const QUESTIONS_PER_AREA: usize = 3;

const ACTIVE_LISTENING: [&str; QUESTIONS_PER_AREA] = [
    "Overall, how do you rate your ability to listen? (Not just the words, but non-verbal signals too)",
    "How able are you to dig deeper into what you have just heard by asking questions?",
    "When the other person pauses, how well do you resist the urge to interrupt?",
];

const EMPATHY_AND_COMPOSURE: [&str; QUESTIONS_PER_AREA] = [
    "How able are you to create a relaxed setting that puts the other person at ease?",
    "How able are you to manage your own emotions, staying calm under tension?",
    "How well do you sense the other person's state of mind and adapt your approach?",
];

const QUESTION_CRAFT: [&str; QUESTIONS_PER_AREA] = [
    "How well do you structure questions to surface concrete examples (behaviours and skills)?",
    "How able are you to phrase questions that assess soft skills?",
    "How well do you avoid yes/no questions, asking ones that call for elaborate answers?",
];

const FAIR_JUDGEMENT: [&str; QUESTIONS_PER_AREA] = [
    "How aware are you of your own biases, and how much do you keep them from swaying you?",
    "How able are you to rely on facts and concrete data rather than impressions or affinity?",
    "How able are you to apply the same yardstick to every candidate?",
];

/// The fixed table of competency questions.
pub struct QuestionBank;

impl QuestionBank {
    /// Prompts for one area, in presentation order.
    pub fn prompts(area: Area) -> &'static [&'static str; QUESTIONS_PER_AREA] {
        match area {
            Area::ActiveListening => &ACTIVE_LISTENING,
            Area::EmpathyAndComposure => &EMPATHY_AND_COMPOSURE,
            Area::QuestionCraft => &QUESTION_CRAFT,
            Area::FairJudgement => &FAIR_JUDGEMENT,
        }
    }

    /// Lowest reachable score for a single area.
    pub const fn min_area_score() -> u32 {
        QUESTIONS_PER_AREA as u32 * LikertRating::MIN as u32
    }

    /// Highest reachable score for a single area. Also the fixed radial
    /// maximum of the results chart.
    pub const fn max_area_score() -> u32 {
        QUESTIONS_PER_AREA as u32 * LikertRating::MAX as u32
    }

    /// Lowest reachable total score.
    pub const fn min_total_score() -> u32 {
        Area::COUNT as u32 * Self::min_area_score()
    }

    /// Highest reachable total score.
    pub const fn max_total_score() -> u32 {
        Area::COUNT as u32 * Self::max_area_score()
    }
}
