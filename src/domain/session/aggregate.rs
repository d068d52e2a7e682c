//! Session aggregate entity.
//!
//! One session per respondent per sitting. The session owns the current
//! phase and, after submission, the assessment outcome shown on the
//! results view. Restarting discards everything accumulated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::assessment::ScoreCard;
use crate::domain::foundation::{SessionId, SubmissionId};

use super::{SessionError, SessionPhase};

/// What a completed submission left behind: the score profile, the
/// generated submission id, and a warning if the record sink failed.
///
/// The full [`crate::domain::assessment::SubmissionRecord`] is not kept;
/// it is handed to the sink and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub score_card: ScoreCard,
    pub submission_id: SubmissionId,
    pub sink_warning: Option<String>,
}

/// The session aggregate: phase plus accumulated session data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    phase: SessionPhase,
    outcome: Option<AssessmentOutcome>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session in the intro phase.
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    /// Creates a fresh session with a caller-chosen id.
    pub fn with_id(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            phase: SessionPhase::Intro,
            outcome: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&AssessmentOutcome> {
        self.outcome.as_ref()
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    /// Start action: `Intro -> Questionnaire`. No other side effects.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(SessionPhase::Questionnaire)?;
        self.touch();
        Ok(())
    }

    /// Successful submission: `Questionnaire -> Results`, storing the
    /// outcome for the results view.
    pub fn complete(&mut self, outcome: AssessmentOutcome) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(SessionPhase::Results)?;
        self.outcome = Some(outcome);
        self.touch();
        Ok(())
    }

    /// Restart action: `Results -> Intro`, discarding all session data.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(SessionPhase::Intro)?;
        self.outcome = None;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
