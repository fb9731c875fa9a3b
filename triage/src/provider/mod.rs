//! Completion provider seam.
//!
//! Both providers speak the OpenAI-style chat completions shape, so the
//! wire types are shared here. The trait is the injection point for stub
//! providers in tests and for callers wanting a different provider order.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mosaia;
pub mod openrouter;

pub use mosaia::MosaiaClient;
pub use openrouter::OpenRouterClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("no completion choices in response")]
    EmptyResponse,
}

/// Common trait for completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (for logging).
    fn name(&self) -> &str;

    /// Send `prompt` as a single user message and return the raw
    /// completion text, capped at `max_tokens` of output.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Build a single-user-message request.
    pub(crate) fn user(model: &str, prompt: &str, max_tokens: u32) -> Self {
        Self {
            model: model.to_string(),
            max_tokens,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    choices: Vec<Choice>,
}

impl ChatResponse {
    /// Pull the first choice's message text out of the response.
    pub(crate) fn into_text(mut self) -> Result<String, ProviderError> {
        if self.choices.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(self.choices.remove(0).message.content)
    }
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}
