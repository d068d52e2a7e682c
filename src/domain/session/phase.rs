//! Session phase state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SessionError;

/// Where the respondent is in the assessment flow.
///
/// Transitions are linear with one back-edge: `Intro -> Questionnaire` on
/// start, `Questionnaire -> Results` on a gated submission, and
/// `Results -> Intro` on an explicit restart. Phases never expire on their
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Intro,
    Questionnaire,
    Results,
}

impl SessionPhase {
    /// Returns true if a transition from self to target is valid.
    pub fn can_transition_to(&self, target: SessionPhase) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (Intro, Questionnaire) | (Questionnaire, Results) | (Results, Intro)
        )
    }

    /// Performs the transition, rejecting invalid edges.
    pub fn transition_to(self, target: SessionPhase) -> Result<SessionPhase, SessionError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(SessionError::InvalidPhase { from: self, to: target })
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionPhase::Intro => "intro",
            SessionPhase::Questionnaire => "questionnaire",
            SessionPhase::Results => "results",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_moves_intro_to_questionnaire() {
        let next = SessionPhase::Intro
            .transition_to(SessionPhase::Questionnaire)
            .unwrap();
        assert_eq!(next, SessionPhase::Questionnaire);
    }

    #[test]
    fn submission_moves_questionnaire_to_results() {
        let next = SessionPhase::Questionnaire
            .transition_to(SessionPhase::Results)
            .unwrap();
        assert_eq!(next, SessionPhase::Results);
    }

    #[test]
    fn restart_moves_results_back_to_intro() {
        let next = SessionPhase::Results
            .transition_to(SessionPhase::Intro)
            .unwrap();
        assert_eq!(next, SessionPhase::Intro);
    }

    #[test]
    fn skipping_the_questionnaire_is_rejected() {
        let result = SessionPhase::Intro.transition_to(SessionPhase::Results);
        assert!(matches!(
            result,
            Err(SessionError::InvalidPhase {
                from: SessionPhase::Intro,
                to: SessionPhase::Results
            })
        ));
    }

    #[test]
    fn going_backwards_without_restart_is_rejected() {
        assert!(SessionPhase::Questionnaire
            .transition_to(SessionPhase::Intro)
            .is_err());
        assert!(SessionPhase::Results
            .transition_to(SessionPhase::Questionnaire)
            .is_err());
    }

    #[test]
    fn self_transitions_are_rejected() {
        for phase in [
            SessionPhase::Intro,
            SessionPhase::Questionnaire,
            SessionPhase::Results,
        ] {
            assert!(phase.transition_to(phase).is_err());
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&SessionPhase::Questionnaire).unwrap();
        assert_eq!(json, "\"questionnaire\"");
    }
}
