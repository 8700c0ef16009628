use serde::Serialize;

use crate::scoring::{PresenceFlag, ReadabilityLevel};

/// A sub-score that could not be computed, e.g. a zero denominator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreFailure {
    pub field: &'static str,
    pub message: String,
}

/// Terminal artifact of one analysis. Serialized as a flat object; the field
/// names are part of the external contract.
///
/// A sub-score that failed is `null` and listed in `errors`. `ats_keyword_score`
/// is `null` whenever one of its inputs is, and otherwise is NOT clamped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub email_score: PresenceFlag,
    pub phone_score: PresenceFlag,
    pub linkedin_score: PresenceFlag,
    pub contact_info_score: u32,
    pub keyword_score: Option<f64>,
    pub keyword_stuffing_score: Option<f64>,
    pub category_keyword_score: Option<f64>,
    pub category_keyword_stuffing_score: Option<f64>,
    pub general_keyword_score: Option<f64>,
    pub job_title_score: Option<f64>,
    pub readability_score: f64,
    pub readability_level: ReadabilityLevel,
    pub ats_keyword_score: Option<f64>,
    pub ats_keywords_to_add: Vec<String>,
    pub general_keywords_to_add: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ScoreFailure>,
}
