use std::sync::Arc;

use crate::llm_client::CompletionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it changes after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `LlmClient` (Groq). Tests swap in a stand-in.
    pub gateway: Arc<dyn CompletionGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }
}
