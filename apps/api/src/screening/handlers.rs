//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::ingest::{extract_all, read_screening_form};
use crate::screening::batch::score_batch;
use crate::screening::models::{BatchWarning, ExtractionFailure, NormalizedResult, Tier};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ScreeningRow {
    pub id: String,
    pub score: f64,
    pub tier: Tier,
    pub color: String,
}

impl From<NormalizedResult> for ScreeningRow {
    fn from(result: NormalizedResult) -> Self {
        Self {
            color: result.tier.color().to_string(),
            id: result.id,
            score: result.score,
            tier: result.tier,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScreeningResponse {
    pub results: Vec<ScreeningRow>,
    pub failures: Vec<ExtractionFailure>,
    pub warnings: Vec<BatchWarning>,
    pub rejected_files: Vec<String>,
    pub keyword_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screenings
///
/// Multipart form: `job_description` plus any number of `resumes` PDF files.
/// Returns every accepted resume ranked best-first.
pub async fn handle_screen(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let form = read_screening_form(multipart).await?;

    let job_description = form
        .job_description
        .filter(|jd| !jd.is_empty())
        .ok_or_else(|| AppError::Validation("Please enter a job description".to_string()))?;

    info!(
        accepted = form.documents.len(),
        rejected = form.rejected_files.len(),
        "Screening batch received"
    );

    let documents = extract_all(state.extractor.clone(), form.documents).await;
    let outcome = score_batch(&job_description, &documents, &state.screening);

    let response = ScreeningResponse {
        results: outcome.ranked.into_iter().map(ScreeningRow::from).collect(),
        failures: outcome.failures,
        warnings: outcome.warnings,
        rejected_files: form.rejected_files,
        keyword_count: outcome.keyword_count,
    };
    debug!("Screening results: {:?}", response.results);

    Ok(Json(response))
}
