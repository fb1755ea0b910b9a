// Screening core: keyword extraction, whole-word matching, normalization, tiering, ranking.
// Pure and synchronous — no I/O happens below `handlers`.

pub mod batch;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod models;
pub mod normalizer;
pub mod ranker;
