pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::extraction::handlers as extraction;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route("/api/v1/resume/extract", post(extraction::handle_extract))
        .route("/api/v1/resume", delete(extraction::handle_clear))
        // Generation API
        .route(
            "/api/v1/questions/generate",
            post(generation::handle_generate),
        )
        .route("/api/v1/questions", get(generation::handle_get_questions))
        .route("/api/v1/questions/export", get(generation::handle_export))
        // The 10 MiB ceiling is enforced in the upload handler; the transport
        // limit just needs to clear it (multipart framing overhead included).
        .layer(DefaultBodyLimit::max(extraction::MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(state)
}
