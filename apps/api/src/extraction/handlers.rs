//! Axum route handlers for résumé upload and reset.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::pdf::extract_resume_text;
use crate::state::{AppState, ResumeText};

/// Upload size ceiling, checked before any extraction attempt.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub chars: usize,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: bool,
}

/// POST /api/v1/resume/extract
///
/// Accepts a multipart `file` field holding a PDF, extracts its text and
/// stores it as the current session résumé. Any failure clears previously
/// extracted text so stale content is never silently reused.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let _gate = state
        .extract_gate
        .try_lock()
        .map_err(|_| AppError::Busy("an extraction is already in flight".to_string()))?;

    match run_extraction(&mut multipart).await {
        Ok((file_name, text)) => {
            let chars = text.chars().count();
            info!("Extracted {chars} characters from '{file_name}'");
            let mut session = state.session.write().await;
            session.resume = Some(ResumeText {
                file_name: file_name.clone(),
                text: text.clone(),
            });
            Ok(Json(ExtractResponse {
                file_name,
                chars,
                text,
            }))
        }
        Err(e) => {
            warn!("Resume extraction failed: {e}");
            state.session.write().await.resume = None;
            Err(e)
        }
    }
}

async fn run_extraction(multipart: &mut Multipart) -> Result<(String, String), AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
        .ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    validate_content_type(field.content_type())?;
    let file_name = field.file_name().unwrap_or("resume.pdf").to_string();

    let bytes: Bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
    validate_size(bytes.len())?;

    let text = tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))??;

    Ok((file_name, text))
}

/// Rejects non-PDF MIME types before any extraction attempt.
fn validate_content_type(content_type: Option<&str>) -> Result<(), AppError> {
    match content_type {
        Some(PDF_MIME) => Ok(()),
        other => Err(AppError::Validation(format!(
            "Please upload a PDF file (got content type '{}')",
            other.unwrap_or("unknown")
        ))),
    }
}

/// Rejects files exceeding the fixed size ceiling before extraction.
fn validate_size(len: usize) -> Result<(), AppError> {
    if len > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File size must be less than 10MB.".to_string(),
        ));
    }
    Ok(())
}

/// DELETE /api/v1/resume
///
/// Clear/reset: discards the current file name and extracted text.
pub async fn handle_clear(State(state): State<AppState>) -> Json<ClearResponse> {
    state.session.write().await.resume = None;
    Json(ClearResponse { cleared: true })
}
