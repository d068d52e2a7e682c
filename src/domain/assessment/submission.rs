//! The submission record handed to the record sink.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SubmissionId;

use super::{Demographics, ResponseSheet};

/// One completed submission: generated identifier, demographics, and every
/// individual response.
///
/// Created at submission time, appended to the sink, then dropped. The
/// respondent's nickname gates the submission but is deliberately not part
/// of the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    id: SubmissionId,
    demographics: Demographics,
    responses: ResponseSheet,
}

impl SubmissionRecord {
    pub fn new(id: SubmissionId, demographics: Demographics, responses: ResponseSheet) -> Self {
        Self {
            id,
            demographics,
            responses,
        }
    }

    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn responses(&self) -> &ResponseSheet {
        &self.responses
    }

    /// Flattens the record into the sink's fixed column order: identifier,
    /// gender, age bracket, education, job, then every response value in
    /// canonical (area, question index) order.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.id.to_string(),
            self.demographics.gender.label().to_string(),
            self.demographics.age_bracket.label().to_string(),
            self.demographics.education.label().to_string(),
            self.demographics.job.label().to_string(),
        ];
        row.extend(self.responses.iter().map(|(_, _, r)| r.value().to_string()));
        row
    }
}
