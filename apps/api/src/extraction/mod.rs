//! Text extractors for uploaded documents.
//!
//! The public entry points never return an error: failures are logged and
//! reported as `None`, and callers treat `None` as a terminal failure for the
//! request.

mod docx;
mod pdf;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a readable zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive has no word/document.xml part")]
    MissingDocumentXml,

    #[error("PDF could not be parsed: {0}")]
    Pdf(String),

    #[error("PDF is encrypted")]
    Encrypted,
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a format from a file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    /// Suffix used when staging a file of this format.
    pub fn suffix(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => ".pdf",
            DocumentFormat::Docx => ".docx",
        }
    }
}

/// Full text of a PDF, one newline-terminated segment per page.
pub fn extract_text_from_pdf(path: &Path) -> Option<String> {
    pdf::read_pdf_text(path)
        .inspect_err(|e| warn!("Error extracting text from PDF {}: {e}", path.display()))
        .ok()
}

/// Full text of a DOCX, one newline-terminated line per body paragraph.
pub fn extract_text_from_docx(path: &Path) -> Option<String> {
    docx::read_docx_text(path)
        .inspect_err(|e| warn!("Error extracting text from DOCX {}: {e}", path.display()))
        .ok()
}

/// Runs the extractor for `format` on the blocking pool.
pub async fn extract_document_text(path: PathBuf, format: DocumentFormat) -> Option<String> {
    let result = tokio::task::spawn_blocking(move || match format {
        DocumentFormat::Pdf => extract_text_from_pdf(&path),
        DocumentFormat::Docx => extract_text_from_docx(&path),
    })
    .await;

    match result {
        Ok(text) => text,
        Err(e) => {
            // a panicking decoder is treated like any other unreadable file
            error!("Extraction task failed: {e}");
            None
        }
    }
}
