//! Document generation — one generic operation shared by every document kind.
//!
//! Flow: validated request → compose prompt → one gateway call → wrap result.
//! No retries and no caching: two identical requests make two upstream calls.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::info;
use validator::Validate;

use crate::errors::AppError;
use crate::generation::prompts::{cover_letter_prompt, portfolio_prompt, resume_prompt};
use crate::llm_client::prompts::{COVER_LETTER_SYSTEM, PORTFOLIO_SYSTEM, RESUME_SYSTEM};
use crate::llm_client::CompletionGateway;
use crate::models::{CoverLetterRequest, PortfolioRequest, ResumeRequest};

/// Describes one generatable document: its input, its prompt, and how the
/// result is named in the response body.
pub trait Document: Send + Sync + 'static {
    type Request: DeserializeOwned + Validate + Send + Sync;

    /// Short name used in logs.
    const KIND: &'static str;
    /// The single key of the JSON response object.
    const RESPONSE_FIELD: &'static str;
    const SYSTEM_PROMPT: &'static str;

    fn compose(request: &Self::Request) -> String;
}

pub struct Resume;
pub struct CoverLetter;
pub struct Portfolio;

impl Document for Resume {
    type Request = ResumeRequest;
    const KIND: &'static str = "resume";
    const RESPONSE_FIELD: &'static str = "resume_text";
    const SYSTEM_PROMPT: &'static str = RESUME_SYSTEM;

    fn compose(request: &ResumeRequest) -> String {
        resume_prompt(request)
    }
}

impl Document for CoverLetter {
    type Request = CoverLetterRequest;
    const KIND: &'static str = "cover_letter";
    const RESPONSE_FIELD: &'static str = "cover_letter_text";
    const SYSTEM_PROMPT: &'static str = COVER_LETTER_SYSTEM;

    fn compose(request: &CoverLetterRequest) -> String {
        cover_letter_prompt(request)
    }
}

impl Document for Portfolio {
    type Request = PortfolioRequest;
    const KIND: &'static str = "portfolio";
    const RESPONSE_FIELD: &'static str = "portfolio_text";
    const SYSTEM_PROMPT: &'static str = PORTFOLIO_SYSTEM;

    fn compose(request: &PortfolioRequest) -> String {
        portfolio_prompt(request)
    }
}

/// Generated text, serialized as `{ "<D::RESPONSE_FIELD>": text }`.
pub struct Generated<D: Document> {
    pub text: String,
    _kind: std::marker::PhantomData<D>,
}

impl<D: Document> Generated<D> {
    pub fn new(text: String) -> Self {
        Self {
            text,
            _kind: std::marker::PhantomData,
        }
    }

    pub fn into_json(self) -> Value {
        let mut body = Map::with_capacity(1);
        body.insert(D::RESPONSE_FIELD.to_string(), Value::String(self.text));
        Value::Object(body)
    }
}

impl<D: Document> fmt::Debug for Generated<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("kind", &D::KIND)
            .field("text", &self.text)
            .finish()
    }
}

/// Composes the prompt for an already-validated request and relays the completion.
pub async fn generate<D: Document>(
    gateway: &dyn CompletionGateway,
    request: &D::Request,
) -> Result<Generated<D>, AppError> {
    let prompt = D::compose(request);
    info!(
        "Generating {} (prompt: {} chars)",
        D::KIND,
        prompt.chars().count()
    );

    let text = gateway.complete(D::SYSTEM_PROMPT, &prompt).await?;

    info!("Generated {} ({} chars)", D::KIND, text.chars().count());
    Ok(Generated::new(text))
}
