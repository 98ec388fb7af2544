//! Common test utilities for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt;

use careerdraft_api::llm_client::{CompletionGateway, LlmError};
use careerdraft_api::{build_router, AppState};

/// What the stand-in gateway answers with.
pub enum Reply {
    Text(String),
    Timeout(Duration),
}

/// Fixed-answer `CompletionGateway` that counts and records its calls.
pub struct StubGateway {
    reply: Reply,
    calls: AtomicUsize,
    last: Mutex<Option<(String, String)>>,
}

impl StubGateway {
    pub fn answering(text: &str) -> Arc<Self> {
        Self::with_reply(Reply::Text(text.to_string()))
    }

    pub fn timing_out(after: Duration) -> Arc<Self> {
        Self::with_reply(Reply::Timeout(after))
    }

    fn with_reply(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(system, prompt)` of the most recent call.
    pub fn last_call(&self) -> Option<(String, String)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((system.to_string(), prompt.to_string()));
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Timeout(after) => Err(LlmError::Timeout(*after)),
        }
    }
}

pub fn app(gateway: Arc<StubGateway>) -> Router {
    build_router(AppState::new(gateway))
}

/// POSTs `body` as JSON and returns the status and decoded JSON body.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
