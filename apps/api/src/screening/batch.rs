//! Batch scoring — the single entry point of the screening core.
//!
//! Pipeline: job description → keywords → raw score per document → normalize/classify → rank.
//! Pure and synchronous; callers own all I/O.

use tracing::{debug, warn};

use crate::screening::keywords::extract_keywords;
use crate::screening::matcher::match_document;
use crate::screening::models::{
    BatchOutcome, BatchWarning, CandidateDocument, ExtractionFailure, RawScore,
};
use crate::screening::normalizer::normalize;
use crate::screening::ranker::rank;

/// Knobs a caller passes into every scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreeningConfig {
    /// `true`: documents whose extraction failed are left out of the ranking.
    /// `false`: they are ranked with a score of 0.
    /// Either way they are listed in `BatchOutcome::failures`.
    pub skip_on_extraction_failure: bool,
    /// Collapse repeated job-description words into a single token.
    pub dedupe_keywords: bool,
}

/// Scores, normalizes, and ranks a batch of documents against a job description.
pub fn score_batch(
    job_description: &str,
    documents: &[CandidateDocument],
    config: &ScreeningConfig,
) -> BatchOutcome {
    let keywords = extract_keywords(job_description, config.dedupe_keywords);
    let mut warnings = Vec::new();

    if keywords.is_empty() {
        warn!("Job description produced no keywords; every document scores 0");
        warnings.push(BatchWarning::EmptyKeywordSet);
    }
    if documents.is_empty() {
        warn!("Empty document batch");
        warnings.push(BatchWarning::EmptyDocumentBatch);
    }

    let mut raw_scores = Vec::with_capacity(documents.len());
    let mut failures = Vec::new();

    for document in documents {
        match &document.text {
            Ok(text) => {
                let score = match_document(text, &keywords);
                debug!(id = %document.id, score, "Scored document");
                raw_scores.push(RawScore {
                    id: document.id.clone(),
                    score,
                });
            }
            Err(e) => {
                warn!(id = %document.id, error = %e, "Text extraction failed");
                failures.push(ExtractionFailure {
                    id: document.id.clone(),
                    reason: e.to_string(),
                });
                if !config.skip_on_extraction_failure {
                    raw_scores.push(RawScore {
                        id: document.id.clone(),
                        score: 0,
                    });
                }
            }
        }
    }

    let ranked = rank(normalize(&raw_scores));

    BatchOutcome {
        ranked,
        failures,
        warnings,
        keyword_count: keywords.len(),
    }
}
