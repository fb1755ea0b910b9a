// Document ingestion: multipart upload parsing, file-type validation, text extraction.
// Produces the (id, text) pairs the screening core consumes; the core never sees raw files.

pub mod extractor;

pub use extractor::{extract_all, ExtractionError, PdfTextExtractor, TextExtractor};

use std::collections::HashSet;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUMES_FIELD: &str = "resumes";

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// A file accepted for screening. `file_name` doubles as the document identifier.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Everything read out of a screening form submission.
#[derive(Debug, Default)]
pub struct ScreeningForm {
    pub job_description: Option<String>,
    pub documents: Vec<UploadedDocument>,
    /// Files that were not accepted: wrong extension or a repeated name.
    pub rejected_files: Vec<String>,
}

/// True when the file name carries an allowed extension (case-insensitive).
pub fn allowed_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Reads the screening form: one `job_description` text field and any number of `resumes` files.
pub async fn read_screening_form(mut multipart: Multipart) -> Result<ScreeningForm, AppError> {
    let mut form = ScreeningForm::default();
    let mut seen_names = HashSet::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                form.job_description = Some(field.text().await?);
            }
            Some(RESUMES_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                if file_name.is_empty() {
                    debug!("Skipping resume field without a file name");
                    continue;
                }
                if !allowed_file(&file_name) || !seen_names.insert(file_name.clone()) {
                    info!(file = %file_name, "Rejected upload");
                    form.rejected_files.push(file_name);
                    continue;
                }
                let bytes = field.bytes().await?;
                form.documents.push(UploadedDocument { file_name, bytes });
            }
            other => {
                debug!(field = ?other, "Ignoring unknown form field");
            }
        }
    }

    Ok(form)
}
