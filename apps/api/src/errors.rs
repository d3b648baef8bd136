use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error resolves at the handler boundary into a single human-readable
/// message; none crash the service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Upstream returned no usable text")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::Configuration(err.to_string()),
            LlmError::Api { status, message } => AppError::Upstream { status, message },
            LlmError::EmptyContent => AppError::EmptyResponse,
            LlmError::Parse(msg) => AppError::Parse(msg),
            LlmError::Http(e) => {
                AppError::Internal(anyhow::anyhow!("transport error calling Gemini: {e}"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    msg.clone(),
                )
            }
            // Upstream failures are surfaced verbatim (status + message) so
            // the caller can decide whether to retry by hand.
            AppError::Upstream { .. } => {
                tracing::error!("Upstream error: {self}");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", self.to_string())
            }
            AppError::EmptyResponse => {
                (StatusCode::BAD_GATEWAY, "EMPTY_RESPONSE", self.to_string())
            }
            AppError::Parse(msg) => {
                tracing::error!("Parse error: {msg}");
                (StatusCode::BAD_GATEWAY, "PARSE_ERROR", msg.clone())
            }
            AppError::Busy(msg) => (StatusCode::CONFLICT, "BUSY", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_message_carries_status_and_upstream_text() {
        let err = AppError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("429"));
        assert!(rendered.contains("rate limited"));
    }

    #[test]
    fn test_missing_api_key_maps_to_configuration_error() {
        let err: AppError = LlmError::MissingApiKey.into();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_api_error_maps_to_upstream_with_status() {
        let err: AppError = LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }
        .into();
        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_content_maps_to_empty_response() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::EmptyResponse));
    }
}
