//! HTTP DTOs for the assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution. Static view copy (intro text, consent notice)
//! lives here with the views that carry it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::ResultsData;
use crate::config::ThemeConfig;
use crate::domain::assessment::{Demographics, ScoreCard};
use crate::domain::catalog::{Area, QuestionBank, CONGRATULATIONS};
use crate::domain::chart::RadarChart;
use crate::domain::foundation::LikertRating;
use crate::domain::session::{Session, SessionPhase};

/// Title shown on every view.
pub const APP_TITLE: &str = "Interview Competence Self-Assessment";

const WELCOME: &str = "\
Welcome. We often think of an organisation as a machine, yet it is really \
a community of people, a \"machine with a soul\". In that light an interview \
is not an interrogation or a bureaucratic procedure but the primary \
instrument for taking care of the relationship. It is an exchange where \
people meet, not just information: cognitive and emotional elements \
intertwine, and the aim is to generate new information and new \
possibilities for growth. This assessment helps you gauge your personal \
effectiveness in conducting an interview.";

const CONSENT_NOTICE: &str = "\
By continuing you consent to the collected data being used, in aggregate \
form only, for statistical purposes.";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit a completed questionnaire.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub nickname: String,
    pub demographics: Demographics,
    /// One value per question, keyed by area, in question order.
    pub responses: HashMap<Area, Vec<u8>>,
}

// ════════════════════════════════════════════════════════════════════════════
// View DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Intro view: static copy plus the start affordance.
#[derive(Debug, Clone, Serialize)]
pub struct IntroView {
    pub title: String,
    pub welcome: String,
    pub consent_notice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_warning: Option<String>,
}

impl IntroView {
    pub fn new(logo_warning: Option<String>) -> Self {
        Self {
            title: APP_TITLE.to_string(),
            welcome: WELCOME.to_string(),
            consent_notice: CONSENT_NOTICE.to_string(),
            logo_warning,
        }
    }
}

/// A selectable option in a demographic drop-down.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceView<T: Serialize> {
    pub value: T,
    pub label: String,
}

/// The fixed demographic option sets.
#[derive(Debug, Clone, Serialize)]
pub struct DemographicOptionsView {
    pub genders: Vec<ChoiceView<crate::domain::assessment::Gender>>,
    pub age_brackets: Vec<ChoiceView<crate::domain::assessment::AgeBracket>>,
    pub education_levels: Vec<ChoiceView<crate::domain::assessment::EducationLevel>>,
    pub job_categories: Vec<ChoiceView<crate::domain::assessment::JobCategory>>,
}

impl DemographicOptionsView {
    pub fn new() -> Self {
        use crate::domain::assessment::{AgeBracket, EducationLevel, Gender, JobCategory};
        Self {
            genders: Gender::ALL
                .into_iter()
                .map(|g| ChoiceView { value: g, label: g.label().to_string() })
                .collect(),
            age_brackets: AgeBracket::ALL
                .into_iter()
                .map(|a| ChoiceView { value: a, label: a.label().to_string() })
                .collect(),
            education_levels: EducationLevel::ALL
                .into_iter()
                .map(|e| ChoiceView { value: e, label: e.label().to_string() })
                .collect(),
            job_categories: JobCategory::ALL
                .into_iter()
                .map(|j| ChoiceView { value: j, label: j.label().to_string() })
                .collect(),
        }
    }
}

impl Default for DemographicOptionsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds and default of the rating slider.
#[derive(Debug, Clone, Serialize)]
pub struct LikertScaleView {
    pub min: u8,
    pub max: u8,
    pub default: u8,
    pub low_label: String,
    pub high_label: String,
}

impl LikertScaleView {
    pub fn new() -> Self {
        Self {
            min: LikertRating::MIN,
            max: LikertRating::MAX,
            default: LikertRating::default().value(),
            low_label: LikertRating::VeryPoor.label().to_string(),
            high_label: LikertRating::Excellent.label().to_string(),
        }
    }
}

impl Default for LikertScaleView {
    fn default() -> Self {
        Self::new()
    }
}

/// One questionnaire section: an area and its prompts.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub area: Area,
    pub label: String,
    pub prompts: Vec<String>,
}

/// The full questionnaire view.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireView {
    pub scale: LikertScaleView,
    pub demographics: DemographicOptionsView,
    pub sections: Vec<SectionView>,
}

impl QuestionnaireView {
    pub fn new() -> Self {
        Self {
            scale: LikertScaleView::new(),
            demographics: DemographicOptionsView::new(),
            sections: Area::ALL
                .into_iter()
                .map(|area| SectionView {
                    area,
                    label: area.label().to_string(),
                    prompts: QuestionBank::prompts(area)
                        .iter()
                        .map(|p| p.to_string())
                        .collect(),
                })
                .collect(),
        }
    }
}

impl Default for QuestionnaireView {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response to session creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub phase: SessionPhase,
    pub intro: IntroView,
}

/// Response to the start action.
#[derive(Debug, Clone, Serialize)]
pub struct StartQuestionnaireResponse {
    pub session_id: String,
    pub phase: SessionPhase,
    pub questionnaire: QuestionnaireView,
}

/// Response to a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAssessmentResponse {
    pub session_id: String,
    pub phase: SessionPhase,
    pub total_score: u32,
    pub max_total_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_warning: Option<String>,
}

/// Response to the restart action.
#[derive(Debug, Clone, Serialize)]
pub struct RestartSessionResponse {
    pub session_id: String,
    pub phase: SessionPhase,
}

impl RestartSessionResponse {
    pub fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            phase: session.phase(),
        }
    }
}

/// One area's score on the results view.
#[derive(Debug, Clone, Serialize)]
pub struct AreaScoreView {
    pub area: Area,
    pub label: String,
    pub score: u32,
    pub max_score: u32,
    pub needs_improvement: bool,
}

/// One spoke of the radar chart.
#[derive(Debug, Clone, Serialize)]
pub struct AxisView {
    pub area: Area,
    pub label: String,
    pub angle: f64,
}

/// One polygon vertex.
#[derive(Debug, Clone, Serialize)]
pub struct VertexView {
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

/// Theme colors for the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ChartColorsView {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// The radar chart, ready to draw: axes, the closed polygon (shared by
/// fill and outline), a fixed radial axis, and theme colors.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub radial_max: u32,
    pub axes: Vec<AxisView>,
    pub polygon: Vec<VertexView>,
    pub colors: ChartColorsView,
}

impl ChartView {
    pub fn from_chart(chart: &RadarChart, theme: &ThemeConfig) -> Self {
        Self {
            radial_max: chart.radial_max(),
            axes: chart
                .axes()
                .iter()
                .map(|a| AxisView {
                    area: a.area,
                    label: a.label.to_string(),
                    angle: a.angle,
                })
                .collect(),
            polygon: chart
                .polygon()
                .iter()
                .map(|v| VertexView {
                    angle: v.angle,
                    radius: v.radius,
                    x: v.x,
                    y: v.y,
                })
                .collect(),
            colors: ChartColorsView {
                primary: theme.primary.clone(),
                secondary: theme.secondary.clone(),
                accent: theme.accent.clone(),
            },
        }
    }
}

/// One improvement feedback panel.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackPanelView {
    pub area: Area,
    pub label: String,
    pub score: u32,
    pub max_score: u32,
    pub title: String,
    pub goal: String,
    pub actions: Vec<String>,
}

/// The complete results view.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub total_score: u32,
    pub max_total_score: u32,
    pub areas: Vec<AreaScoreView>,
    pub chart: ChartView,
    pub feedback: Vec<FeedbackPanelView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub congratulations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_warning: Option<String>,
}

impl ResultsResponse {
    pub fn from_results(results: &ResultsData, theme: &ThemeConfig) -> Self {
        let feedback: Vec<FeedbackPanelView> = results
            .feedback
            .iter()
            .map(|(area, entry)| FeedbackPanelView {
                area: *area,
                label: area.label().to_string(),
                score: results.score_card.area_score(*area),
                max_score: QuestionBank::max_area_score(),
                title: entry.title.to_string(),
                goal: entry.goal.to_string(),
                actions: entry.actions.iter().map(|a| a.to_string()).collect(),
            })
            .collect();

        Self {
            total_score: results.score_card.total(),
            max_total_score: QuestionBank::max_total_score(),
            areas: area_scores(&results.score_card),
            chart: ChartView::from_chart(&results.chart, theme),
            congratulations: feedback
                .is_empty()
                .then(|| CONGRATULATIONS.to_string()),
            feedback,
            persistence_warning: results.sink_warning.clone(),
        }
    }
}

fn area_scores(card: &ScoreCard) -> Vec<AreaScoreView> {
    card.scores()
        .map(|(area, score)| AreaScoreView {
            area,
            label: area.label().to_string(),
            score,
            max_score: QuestionBank::max_area_score(),
            needs_improvement: card.needs_improvement(area),
        })
        .collect()
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{select_feedback, ResponseSheet};
    use crate::domain::catalog::QUESTIONS_PER_AREA;

    #[test]
    fn submit_request_deserializes() {
        let json = r#"{
            "nickname": "Dana",
            "demographics": {
                "gender": "female",
                "age_bracket": "from31_to40",
                "education": "masters_degree",
                "job": "middle_manager"
            },
            "responses": {
                "active_listening": [3, 4, 5],
                "empathy_and_composure": [3, 3, 3],
                "question_craft": [2, 2, 2],
                "fair_judgement": [6, 6, 6]
            }
        }"#;
        let req: SubmitAssessmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.nickname, "Dana");
        assert_eq!(req.responses[&Area::ActiveListening], vec![3, 4, 5]);
    }

    #[test]
    fn questionnaire_view_covers_every_area() {
        let view = QuestionnaireView::new();
        assert_eq!(view.sections.len(), Area::COUNT);
        for section in &view.sections {
            assert_eq!(section.prompts.len(), QUESTIONS_PER_AREA);
        }
        assert_eq!(view.scale.min, 1);
        assert_eq!(view.scale.max, 6);
        assert_eq!(view.scale.default, 3);
    }

    #[test]
    fn demographic_options_match_reference_sizes() {
        let options = DemographicOptionsView::new();
        assert_eq!(options.genders.len(), 4);
        assert_eq!(options.age_brackets.len(), 7);
        assert_eq!(options.education_levels.len(), 6);
        assert_eq!(options.job_categories.len(), 7);
    }

    #[test]
    fn results_response_takes_the_congratulatory_path_on_top_scores() {
        let card = ScoreCard::compute(&ResponseSheet::uniform(LikertRating::Excellent));
        let results = ResultsData {
            score_card: card,
            chart: RadarChart::build(&card),
            feedback: select_feedback(&card),
            sink_warning: None,
        };
        let response = ResultsResponse::from_results(&results, &ThemeConfig::default());

        assert_eq!(response.total_score, 72);
        assert!(response.feedback.is_empty());
        assert_eq!(response.congratulations.as_deref(), Some(CONGRATULATIONS));
        assert!(response.persistence_warning.is_none());
    }

    #[test]
    fn results_response_carries_panels_and_chart() {
        let card = ScoreCard::compute(&ResponseSheet::uniform(LikertRating::Fair));
        let results = ResultsData {
            score_card: card,
            chart: RadarChart::build(&card),
            feedback: select_feedback(&card),
            sink_warning: Some("offline".to_string()),
        };
        let response = ResultsResponse::from_results(&results, &ThemeConfig::default());

        assert_eq!(response.feedback.len(), Area::COUNT);
        assert!(response.congratulations.is_none());
        assert_eq!(response.chart.polygon.len(), Area::COUNT + 1);
        assert_eq!(response.chart.radial_max, 18);
        assert_eq!(response.chart.colors.primary, "#1f77b4");
        assert_eq!(response.persistence_warning.as_deref(), Some("offline"));
        for panel in &response.feedback {
            assert_eq!(panel.score, 9);
            assert_eq!(panel.max_score, 18);
            assert_eq!(panel.actions.len(), 3);
        }
    }

    #[test]
    fn intro_view_carries_static_copy() {
        let view = IntroView::new(None);
        assert_eq!(view.title, APP_TITLE);
        assert!(view.welcome.contains("machine with a soul"));
        assert!(view.consent_notice.contains("statistical purposes"));
        assert!(view.logo_warning.is_none());
    }

    #[test]
    fn error_response_constructors_set_codes() {
        assert_eq!(ErrorResponse::bad_request("x").code, "BAD_REQUEST");
        assert_eq!(ErrorResponse::not_found("Session", "abc").code, "NOT_FOUND");
        assert_eq!(ErrorResponse::conflict("x").code, "CONFLICT");
        assert_eq!(ErrorResponse::internal("x").code, "INTERNAL_ERROR");
    }
}
