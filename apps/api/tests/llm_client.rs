//! Drives `LlmClient` against a local stand-in for the Groq chat-completions API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use careerdraft_api::llm_client::{CompletionGateway, LlmClient, LlmError, MODEL};

type Captured = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/openai/v1")
}

fn client(base_url: &str, timeout: Duration) -> LlmClient {
    LlmClient::new("test-key".to_string(), base_url, timeout).unwrap()
}

#[tokio::test]
async fn sends_fixed_model_temperature_and_both_messages() {
    async fn completions(
        State(captured): State<Captured>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        captured.lock().unwrap().push((headers, body));
        Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Generated text" } }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 3 }
        }))
    }

    let captured: Captured = Arc::default();
    let router = Router::new()
        .route("/openai/v1/chat/completions", post(completions))
        .with_state(captured.clone());
    let base_url = spawn_upstream(router).await;

    let text = client(&base_url, Duration::from_secs(5))
        .complete("You generate professional resumes.", "Name: Jane Doe")
        .await
        .unwrap();

    assert_eq!(text, "Generated text");

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let (headers, body) = &captured[0];
    assert_eq!(headers["authorization"], "Bearer test-key");
    assert_eq!(body["model"], MODEL);
    assert!((body["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    assert_eq!(
        body["messages"],
        json!([
            { "role": "system", "content": "You generate professional resumes." },
            { "role": "user", "content": "Name: Jane Doe" }
        ])
    );
}

#[tokio::test]
async fn api_error_message_is_extracted() {
    async fn unauthorized() -> impl IntoResponse {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Invalid API Key", "type": "invalid_request_error" } })),
        )
    }

    let router = Router::new().route("/openai/v1/chat/completions", post(unauthorized));
    let base_url = spawn_upstream(router).await;

    let err = client(&base_url, Duration::from_secs(5))
        .complete("system", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Api { status: 401, .. }));
    assert_eq!(err.to_string(), "API error (status 401): Invalid API Key");
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    async fn limited(State(hits): State<Arc<Mutex<u32>>>) -> impl IntoResponse {
        *hits.lock().unwrap() += 1;
        (StatusCode::TOO_MANY_REQUESTS, "slow down")
    }

    let hits = Arc::new(Mutex::new(0));
    let router = Router::new()
        .route("/openai/v1/chat/completions", post(limited))
        .with_state(hits.clone());
    let base_url = spawn_upstream(router).await;

    let err = client(&base_url, Duration::from_secs(5))
        .complete("system", "prompt")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API error (status 429): slow down");
    assert_eq!(*hits.lock().unwrap(), 1);
}

#[tokio::test]
async fn no_choices_is_empty_content() {
    async fn empty() -> Json<Value> {
        Json(json!({ "choices": [] }))
    }

    let router = Router::new().route("/openai/v1/chat/completions", post(empty));
    let base_url = spawn_upstream(router).await;

    let err = client(&base_url, Duration::from_secs(5))
        .complete("system", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::EmptyContent));
}

#[tokio::test]
async fn undecodable_body_is_a_parse_error() {
    async fn garbage() -> &'static str {
        "<html>not json</html>"
    }

    let router = Router::new().route("/openai/v1/chat/completions", post(garbage));
    let base_url = spawn_upstream(router).await;

    let err = client(&base_url, Duration::from_secs(5))
        .complete("system", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Parse(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    async fn slow() -> Json<Value> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Json(json!({ "choices": [{ "message": { "content": "late" } }] }))
    }

    let router = Router::new().route("/openai/v1/chat/completions", post(slow));
    let base_url = spawn_upstream(router).await;

    let err = client(&base_url, Duration::from_secs(1))
        .complete("system", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Timeout(_)));
    assert_eq!(err.to_string(), "Request timed out after 1s");
}

#[tokio::test]
async fn unreachable_upstream_is_an_http_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"), Duration::from_secs(5))
        .complete("system", "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Http(_)));
}
