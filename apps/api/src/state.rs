use std::sync::Arc;

use crate::config::Config;
use crate::ingest::TextExtractor;
use crate::screening::batch::ScreeningConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Scoring knobs handed to every batch; derived from `config` at startup.
    pub screening: ScreeningConfig,
}
