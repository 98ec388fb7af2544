//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::extract::ValidatedJson;
use crate::generation::pipeline::{generate, Document};
use crate::state::AppState;

/// POST /generate, /generate-cover-letter, /generate-portfolio
///
/// One handler instantiated per document kind. Validation happens in the
/// extractor, so an invalid body never reaches the gateway.
pub async fn handle_generate<D: Document>(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<D::Request>,
) -> Result<Json<Value>, AppError> {
    let generated = generate::<D>(state.gateway.as_ref(), &request).await?;
    Ok(Json(generated.into_json()))
}
