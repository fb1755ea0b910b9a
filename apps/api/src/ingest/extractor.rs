//! Text extraction boundary — turns uploaded document bytes into plain text.
//!
//! Default: `PdfTextExtractor` (raw text via `pdf-extract`, no layout recovery).
//! `AppState` holds an `Arc<dyn TextExtractor>`, so tests and alternative backends plug in here.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::ingest::UploadedDocument;
use crate::screening::models::CandidateDocument;

/// Why a document produced no text at all. An empty-but-valid document is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("document could not be parsed: {0}")]
    Parse(String),

    #[error("extraction aborted: {0}")]
    Aborted(String),
}

/// The contract the screening core needs from document ingestion.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Extracts the raw text layer of a PDF.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Parse(e.to_string()))
    }
}

/// Extracts every upload on the blocking pool, concurrently.
///
/// Results come back in upload order. A panic inside the extractor is confined to its own
/// task and reported as `ExtractionError::Aborted` for that document.
pub async fn extract_all(
    extractor: Arc<dyn TextExtractor>,
    uploads: Vec<UploadedDocument>,
) -> Vec<CandidateDocument> {
    let handles: Vec<_> = uploads
        .into_iter()
        .map(|upload| {
            let extractor = Arc::clone(&extractor);
            let id = upload.file_name;
            let bytes = upload.bytes;
            let handle = tokio::task::spawn_blocking(move || extractor.extract(&bytes));
            (id, handle)
        })
        .collect();

    let mut documents = Vec::with_capacity(handles.len());
    for (id, handle) in handles {
        let document = match handle.await {
            Ok(Ok(text)) => {
                debug!(id = %id, chars = text.len(), "Extracted text");
                CandidateDocument::extracted(id, text)
            }
            Ok(Err(e)) => CandidateDocument::failed(id, e),
            Err(e) => {
                warn!(id = %id, "Extractor task failed: {e}");
                CandidateDocument::failed(id, ExtractionError::Aborted(e.to_string()))
            }
        };
        documents.push(document);
    }
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    /// Treats the upload bytes as UTF-8 text; `!fail` and `!panic` trigger the error paths.
    struct PlainTextExtractor;

    impl TextExtractor for PlainTextExtractor {
        fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
            match bytes {
                b"!fail" => Err(ExtractionError::Parse("not a document".to_string())),
                b"!panic" => panic!("extractor blew up"),
                _ => Ok(String::from_utf8_lossy(bytes).into_owned()),
            }
        }
    }

    fn upload(name: &str, body: &'static [u8]) -> UploadedDocument {
        UploadedDocument {
            file_name: name.to_string(),
            bytes: Bytes::from_static(body),
        }
    }

    #[test]
    fn test_pdf_extractor_rejects_garbage() {
        let result = PdfTextExtractor.extract(b"this is not a pdf");
        assert!(matches!(result, Err(ExtractionError::Parse(_))));
    }

    #[tokio::test]
    async fn test_extract_all_preserves_upload_order() {
        let uploads = vec![
            upload("c.pdf", b"third"),
            upload("a.pdf", b"first"),
            upload("b.pdf", b"second"),
        ];
        let docs = extract_all(Arc::new(PlainTextExtractor), uploads).await;
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["c.pdf", "a.pdf", "b.pdf"]);
        assert_eq!(docs[1].text.as_deref(), Ok("first"));
    }

    #[tokio::test]
    async fn test_extract_all_reports_failures_per_document() {
        let uploads = vec![upload("bad.pdf", b"!fail"), upload("good.pdf", b"rust")];
        let docs = extract_all(Arc::new(PlainTextExtractor), uploads).await;
        assert!(matches!(docs[0].text, Err(ExtractionError::Parse(_))));
        assert_eq!(docs[1].text.as_deref(), Ok("rust"));
    }

    #[tokio::test]
    async fn test_extract_all_contains_panics() {
        let uploads = vec![upload("boom.pdf", b"!panic"), upload("fine.pdf", b"go")];
        let docs = extract_all(Arc::new(PlainTextExtractor), uploads).await;
        assert!(matches!(docs[0].text, Err(ExtractionError::Aborted(_))));
        assert_eq!(docs[1].text.as_deref(), Ok("go"));
    }

    #[tokio::test]
    async fn test_empty_text_is_not_a_failure() {
        let docs = extract_all(Arc::new(PlainTextExtractor), vec![upload("blank.pdf", b"")]).await;
        assert_eq!(docs[0].text.as_deref(), Ok(""));
    }
}
