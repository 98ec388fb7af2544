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
#[derive(Debug, Error)]
pub enum AppError {
    /// Required field missing or empty, or the body is not the expected JSON.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The completion gateway failed. Displays as the upstream message only.
    #[error(transparent)]
    Upstream(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                msg.clone()
            }
            AppError::Upstream(e) => {
                tracing::error!("Completion gateway error: {e}");
                e.to_string()
            }
        };

        (self.status(), Json(json!({ "detail": detail }))).into_response()
    }
}
