//! Axum route handlers for the Scoring API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::scoring::aggregate::ScoreOutcome;
use crate::scoring::categorize::{categorize_skills, SkillCategories};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job_role: String,
    #[serde(default)]
    pub resume_data: ResumeData,
}

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    #[serde(default)]
    pub resume_data: ResumeData,
}

/// POST /api/v1/score
///
/// Scores the résumé against the named role. An unregistered role is not an
/// error: it returns 200 with score 0 and `reason: "Unknown role"`.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreOutcome>, AppError> {
    if request.job_role.trim().is_empty() {
        return Err(AppError::Validation("job_role cannot be empty".to_string()));
    }

    let outcome = state
        .scorer
        .score(&request.resume_data, &request.job_role)
        .await?;

    Ok(Json(outcome))
}

/// POST /api/v1/skills/categorize
pub async fn handle_categorize(Json(request): Json<CategorizeRequest>) -> Json<SkillCategories> {
    Json(categorize_skills(&request.resume_data))
}
