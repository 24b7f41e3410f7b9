//! Axum route handler for resume analysis.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::preview::build_preview;
use crate::analysis::staging::stage_upload;
use crate::errors::AppError;
use crate::extraction::{extract_document_text, DocumentFormat};
use crate::parser::parse_resume_text;
use crate::state::AppState;
use crate::store::NewResume;

/// Multipart part carrying the document.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub file_name: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub full_text_preview: String,
}

struct Upload {
    file_name: String,
    format: DocumentFormat,
    bytes: Bytes,
}

/// POST /api/v1/resumes/analyze
///
/// Extracts text from an uploaded PDF or DOCX, parses contact details and
/// skills, stores the record, and returns the fields with a text preview.
/// The staged copy of the upload is removed on every exit path.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(&mut multipart).await?;

    let staged = stage_upload(&state.config.upload_dir, upload.bytes, upload.format).await?;

    let full_text = extract_document_text(staged.path().to_path_buf(), upload.format)
        .await
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            warn!("No text extracted from '{}'", upload.file_name);
            AppError::ExtractionFailed
        })?;
    drop(staged);

    let record = parse_resume_text(&full_text).map_err(|_| AppError::ExtractionFailed)?;

    let id = state
        .store
        .insert(NewResume {
            file_name: &upload.file_name,
            record: &record,
            full_text: &full_text,
        })
        .await?;

    info!(
        "Analyzed '{}' as resume {id} ({} skills)",
        upload.file_name,
        record.skills.len()
    );

    Ok(Json(AnalyzeResponse {
        file_name: upload.file_name,
        name: record.name,
        email: record.email,
        phone: record.phone,
        skills: record.skills,
        full_text_preview: build_preview(&full_text),
    }))
}

/// Finds the file part and validates its name before reading the body, so
/// unsupported uploads are rejected without buffering or staging anything.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::MissingFile);
        }

        let format = DocumentFormat::from_file_name(&file_name).ok_or_else(|| {
            AppError::UnsupportedFormat(
                std::path::Path::new(&file_name)
                    .extension()
                    .map(|e| e.to_string_lossy().to_lowercase())
                    .unwrap_or_default(),
            )
        })?;

        let bytes = field.bytes().await?;

        return Ok(Upload {
            file_name,
            format,
            bytes,
        });
    }

    Err(AppError::MissingFile)
}
