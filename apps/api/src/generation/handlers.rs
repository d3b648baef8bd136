//! Axum route handlers for question generation and the grouped view.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::generator::generate_questions;
use crate::generation::questions::{GenerationResult, ProfileMeta};
use crate::render::{group_by_category, render_plain_text, CategoryGroup};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    /// Optional override; defaults to the résumé extracted in this session.
    pub resume_text: Option<String>,
}

/// The grouped view of the current result: meta plus per-category sections
/// in lexical display order, each with its count.
#[derive(Debug, Serialize)]
pub struct QuestionsView {
    pub meta: ProfileMeta,
    pub categories: Vec<CategoryGroup>,
}

fn build_view(result: &GenerationResult) -> QuestionsView {
    QuestionsView {
        meta: result.meta.clone(),
        categories: group_by_category(&result.questions),
    }
}

/// POST /api/v1/questions/generate
///
/// Full pipeline: résumé text → prompt → Gemini → recovered JSON → grouped
/// view. The result becomes the session's single most-recent value. A failed
/// attempt discards any prior result rather than leaving stale content; the
/// pre-network validation refusal leaves it untouched.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<QuestionsView>, AppError> {
    let _gate = state.generate_gate.try_lock().map_err(|_| {
        AppError::Busy("a generation request is already in flight".to_string())
    })?;

    let resume_text = match request.resume_text {
        Some(text) => text,
        None => {
            let session = state.session.read().await;
            session
                .resume
                .as_ref()
                .map(|r| r.text.clone())
                .ok_or_else(|| {
                    AppError::Validation(
                        "No resume text available. Upload a resume PDF first.".to_string(),
                    )
                })?
        }
    };

    match generate_questions(&resume_text, &state.llm).await {
        Ok(result) => {
            let view = build_view(&result);
            state.session.write().await.result = Some(result);
            Ok(Json(view))
        }
        Err(e @ AppError::Validation(_)) => Err(e),
        Err(e) => {
            state.session.write().await.result = None;
            warn!("Question generation failed: {e}");
            Err(e)
        }
    }
}

/// GET /api/v1/questions
///
/// Returns the grouped view of the most recent generation, or 404 when the
/// session has none.
pub async fn handle_get_questions(
    State(state): State<AppState>,
) -> Result<Json<QuestionsView>, AppError> {
    let session = state.session.read().await;
    let result = session.result.as_ref().ok_or_else(|| {
        AppError::NotFound("No generated questions in this session".to_string())
    })?;
    Ok(Json(build_view(result)))
}

/// GET /api/v1/questions/export
///
/// The flattened-text export of the grouped view, served as `text/plain`.
/// The same result always serializes to the identical blob.
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session = state.session.read().await;
    let result = session.result.as_ref().ok_or_else(|| {
        AppError::NotFound("No generated questions to export".to_string())
    })?;
    let blob = render_plain_text(result);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], blob))
}
