use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careerdraft_api::config::Config;
use careerdraft_api::llm_client::{self, LlmClient};
use careerdraft_api::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing GROQ_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "careerdraft_api={},tower_http={}",
                &config.rust_log, &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerDraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion client
    let llm = LlmClient::new(
        config.groq_api_key.clone(),
        &config.groq_api_url,
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build completion API client")?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        config.groq_api_url
    );

    let state = AppState::new(Arc::new(llm));
    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
