//! Static improvement feedback, one entry per competency area.

use super::Area;

/// Message rendered when no area falls below the improvement threshold.
pub const CONGRATULATIONS: &str =
    "Congratulations! You scored high in every area. Keep cultivating these skills.";

/// Improvement guidance for one competency area: a headline, the goal the
/// guidance works toward, and concrete actions in recommended order.
#[derive(Debug, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub title: &'static str,
    pub goal: &'static str,
    pub actions: &'static [&'static str],
}

static ACTIVE_LISTENING: FeedbackEntry = FeedbackEntry {
    title: "Strengthening Active Listening",
    goal: "Move from merely hearing to generative listening.",
    actions: &[
        "Watch body language: do the non-verbal signals match the words?",
        "Restate what the other person said in your own words to confirm understanding.",
        "Use openers such as \"Can you tell me more about...?\" to invite narration.",
    ],
};

static EMPATHY_AND_COMPOSURE: FeedbackEntry = FeedbackEntry {
    title: "Strengthening Empathy and Composure",
    goal: "Tune in to the other person's wavelength to lower their defences.",
    actions: &[
        "Before the interview, reflect on the worries the other person may bring.",
        "Keep a welcoming posture; avoid crossing your arms.",
        "Manage your own nerves with steady breathing.",
    ],
};

static QUESTION_CRAFT: FeedbackEntry = FeedbackEntry {
    title: "Strengthening Question Craft",
    goal: "Collect useful information, not just confirmations.",
    actions: &[
        "Ask for Situation, Task, Action and Result to obtain concrete examples.",
        "Prepare questions in advance, focused on past behaviour.",
        "Practise with colleagues in mock interviews.",
    ],
};

static FAIR_JUDGEMENT: FeedbackEntry = FeedbackEntry {
    title: "Strengthening Fair Judgement",
    goal: "Base the evaluation on facts, reducing cognitive bias.",
    actions: &[
        "Use a structured evaluation grid built on objective criteria.",
        "Judge the quality of the answer, not the emotion of the person answering.",
        "Watch out for the halo effect and confirmation bias.",
    ],
};

/// The feedback entry for one area.
///
/// Every area has exactly one entry; the table's key set mirrors the
/// question bank's.
pub fn feedback_for(area: Area) -> &'static FeedbackEntry {
    match area {
        Area::ActiveListening => &ACTIVE_LISTENING,
        Area::EmpathyAndComposure => &EMPATHY_AND_COMPOSURE,
        Area::QuestionCraft => &QUESTION_CRAFT,
        Area::FairJudgement => &FAIR_JUDGEMENT,
    }
}
