pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::generation::handlers::handle_generate;
use crate::generation::pipeline::{CoverLetter, Portfolio, Resume};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handle_generate::<Resume>))
        .route(
            "/generate-cover-letter",
            post(handle_generate::<CoverLetter>),
        )
        .route("/generate-portfolio", post(handle_generate::<Portfolio>))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Any origin, method and header; credentials allowed (origin is mirrored).
                .layer(CorsLayer::very_permissive()),
        )
}
