// Document generation: prompt composition plus one completion call per request.
// All upstream calls go through llm_client::CompletionGateway.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
