//! Demographic metadata collected alongside the questionnaire.
//!
//! Every field is a closed enumeration: the questionnaire renders these as
//! fixed option sets, and the submission row stores the display label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-declared gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    NotDisclosed,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::NotDisclosed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::NotDisclosed => "Prefer not to say",
        }
    }
}

/// Age bracket, in the same seven bands as the original questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    UpTo20,
    From21To30,
    From31To40,
    From41To50,
    From51To60,
    From61To70,
    Over70,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 7] = [
        AgeBracket::UpTo20,
        AgeBracket::From21To30,
        AgeBracket::From31To40,
        AgeBracket::From41To50,
        AgeBracket::From51To60,
        AgeBracket::From61To70,
        AgeBracket::Over70,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::UpTo20 => "up to 20 years",
            AgeBracket::From21To30 => "21-30 years",
            AgeBracket::From31To40 => "31-40 years",
            AgeBracket::From41To50 => "41-50 years",
            AgeBracket::From51To60 => "51-60 years",
            AgeBracket::From61To70 => "61-70 years",
            AgeBracket::Over70 => "over 70 years",
        }
    }
}

/// Highest education level attained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    MiddleSchool,
    VocationalQualification,
    HighSchoolDiploma,
    BachelorsDegree,
    MastersDegree,
    Postgraduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::MiddleSchool,
        EducationLevel::VocationalQualification,
        EducationLevel::HighSchoolDiploma,
        EducationLevel::BachelorsDegree,
        EducationLevel::MastersDegree,
        EducationLevel::Postgraduate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::MiddleSchool => "middle school",
            EducationLevel::VocationalQualification => "vocational qualification",
            EducationLevel::HighSchoolDiploma => "high school diploma",
            EducationLevel::BachelorsDegree => "bachelor's degree",
            EducationLevel::MastersDegree => "master's degree (or single cycle)",
            EducationLevel::Postgraduate => "postgraduate qualification",
        }
    }
}

/// Current job category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    Entrepreneur,
    TopManager,
    MiddleManager,
    Employee,
    Worker,
    Trainee,
    Freelancer,
}

impl JobCategory {
    pub const ALL: [JobCategory; 7] = [
        JobCategory::Entrepreneur,
        JobCategory::TopManager,
        JobCategory::MiddleManager,
        JobCategory::Employee,
        JobCategory::Worker,
        JobCategory::Trainee,
        JobCategory::Freelancer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::Entrepreneur => "entrepreneur",
            JobCategory::TopManager => "top manager",
            JobCategory::MiddleManager => "middle manager",
            JobCategory::Employee => "employee",
            JobCategory::Worker => "worker",
            JobCategory::Trainee => "trainee",
            JobCategory::Freelancer => "freelancer",
        }
    }
}

/// The full demographic record attached to one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub gender: Gender,
    pub age_bracket: AgeBracket,
    pub education: EducationLevel,
    pub job: JobCategory,
}

impl fmt::Display for Demographics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.gender.label(),
            self.age_bracket.label(),
            self.education.label(),
            self.job.label()
        )
    }
}
