use serde::{Deserialize, Serialize};

use crate::ingest::ExtractionError;

/// Qualitative bucket derived from a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Presentation colour for the tier.
    pub fn color(self) -> &'static str {
        match self {
            Tier::High => "success",
            Tier::Medium => "warning",
            Tier::Low => "danger",
        }
    }
}

/// One candidate handed over by ingestion: its identifier plus the outcome of text extraction.
#[derive(Debug)]
pub struct CandidateDocument {
    pub id: String,
    pub text: Result<String, ExtractionError>,
}

impl CandidateDocument {
    pub fn extracted(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Ok(text.into()),
        }
    }

    pub fn failed(id: impl Into<String>, error: ExtractionError) -> Self {
        Self {
            id: id.into(),
            text: Err(error),
        }
    }
}

/// Unscaled count of keyword-token matches for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScore {
    pub id: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub id: String,
    /// 0.0 – 1.0, rounded to 4 decimal places
    pub score: f64,
    pub tier: Tier,
}

/// A document whose text could not be extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionFailure {
    pub id: String,
    pub reason: String,
}

/// Non-fatal conditions observed while scoring a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchWarning {
    EmptyKeywordSet,
    EmptyDocumentBatch,
}

/// Everything a scoring run hands back to its caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub ranked: Vec<NormalizedResult>,
    pub failures: Vec<ExtractionFailure>,
    pub warnings: Vec<BatchWarning>,
    pub keyword_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::High).unwrap(), r#""high""#);
        assert_eq!(serde_json::to_string(&Tier::Medium).unwrap(), r#""medium""#);
        assert_eq!(serde_json::to_string(&Tier::Low).unwrap(), r#""low""#);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(Tier::High.color(), "success");
        assert_eq!(Tier::Medium.color(), "warning");
        assert_eq!(Tier::Low.color(), "danger");
    }

    #[test]
    fn test_batch_warning_serde() {
        let json = serde_json::to_string(&BatchWarning::EmptyKeywordSet).unwrap();
        assert_eq!(json, r#""empty_keyword_set""#);
        let back: BatchWarning = serde_json::from_str(r#""empty_document_batch""#).unwrap();
        assert_eq!(back, BatchWarning::EmptyDocumentBatch);
    }
}
