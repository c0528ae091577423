//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::scoring::composite::{ImprovementResult, ScoreReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job_description: String,
    /// Plain text, or HTML when it starts with `<`.
    pub candidate_document: String,
    #[serde(default)]
    pub important_terms: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ImprovementRequest {
    pub job_description: String,
    pub original_document: String,
    pub revised_document: String,
    #[serde(default)]
    pub important_terms: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores a candidate document against a job description. Blank inputs are valid and
/// score 0.0.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    let limit = state.config.max_document_chars;
    check_length("job_description", &request.job_description, limit)?;
    check_length("candidate_document", &request.candidate_document, limit)?;

    let report = state.engine.score_report(
        &request.job_description,
        &request.candidate_document,
        request.important_terms.as_deref(),
    )?;

    info!(score = report.score, "Scored candidate document");
    Ok(Json(report))
}

/// POST /api/v1/match/improvement
///
/// Scores the original and revised documents against the same JD and returns the delta.
pub async fn handle_improvement(
    State(state): State<AppState>,
    Json(request): Json<ImprovementRequest>,
) -> Result<Json<ImprovementResult>, AppError> {
    let limit = state.config.max_document_chars;
    check_length("job_description", &request.job_description, limit)?;
    check_length("original_document", &request.original_document, limit)?;
    check_length("revised_document", &request.revised_document, limit)?;

    let result = state.engine.calculate_improvement(
        &request.job_description,
        &request.original_document,
        &request.revised_document,
        request.important_terms.as_deref(),
    )?;

    info!(
        before = result.before,
        after = result.after,
        improvement = result.improvement,
        "Compared document revision"
    );
    Ok(Json(result))
}

fn check_length(field: &str, value: &str, limit: usize) -> Result<(), AppError> {
    let chars = value.chars().count();
    if chars > limit {
        return Err(AppError::Validation(format!(
            "{field} is {chars} characters, limit is {limit}"
        )));
    }
    Ok(())
}
