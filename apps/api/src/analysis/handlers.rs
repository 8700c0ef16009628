//! Axum route handlers for the Resume Analysis API.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::facts::{ExtractedFacts, FactBundle, ResumeDocument};
use crate::models::report::ScoreReport;
use crate::models::resume::ResumeProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub career_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub data: ScoreReport,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub data: ResumeProfile,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Full pipeline: extract facts for the career name → score → report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalysisResponse>), AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.career_name.trim().is_empty() {
        return Err(AppError::Validation(
            "career_name cannot be empty".to_string(),
        ));
    }

    let document = ResumeDocument {
        text: request.resume_text,
        career_name: request.career_name.trim().to_string(),
    };
    let bundle = state.fact_extractor.extract(&document).await?;

    Ok(score_bundle(&state, &bundle))
}

/// POST /api/v1/resumes/score
///
/// Scores caller-supplied facts without calling the model. Incomplete facts
/// are rejected before any sub-score is computed.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(facts): Json<ExtractedFacts>,
) -> Result<(StatusCode, Json<AnalysisResponse>), AppError> {
    let bundle = FactBundle::try_from(facts)?;
    Ok(score_bundle(&state, &bundle))
}

/// POST /api/v1/resumes/extract
///
/// Structured resume profile: personal information, education, work history,
/// certifications, skills.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let data = state
        .profile_extractor
        .extract_profile(&request.resume_text)
        .await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse { data })))
}

fn score_bundle(state: &AppState, bundle: &FactBundle) -> (StatusCode, Json<AnalysisResponse>) {
    let data = state.engine.score(bundle);
    let analysis_id = Uuid::new_v4();

    info!(
        %analysis_id,
        ats_keyword_score = ?data.ats_keyword_score,
        failed_sub_scores = data.errors.len(),
        "Resume scored"
    );

    (
        StatusCode::CREATED,
        Json(AnalysisResponse {
            analysis_id,
            analyzed_at: Utc::now(),
            data,
        }),
    )
}
