//! Fallback provider: OpenRouter chat completions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::provider::{ChatRequest, ChatResponse, CompletionProvider, ProviderError};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const FALLBACK_MODEL: &str = "mistralai/mistral-small-3.2-24b-instruct:free";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for the OpenRouter API, pinned to the free Mistral Small model.
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    /// Fails only when the underlying HTTP client cannot be built; a
    /// default client without the request timeout is never substituted.
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: FALLBACK_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError> {
        let body = ChatRequest::user(&self.model, prompt, max_tokens);

        tracing::debug!(model = %self.model, "sending completion request to OpenRouter");

        let response = self
            .client
            .post(OPENROUTER_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let chat: ChatResponse = response.json().await?;
        chat.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_free_mistral() {
        let client = OpenRouterClient::new("test-key".to_string()).unwrap();
        assert_eq!(client.model(), "mistralai/mistral-small-3.2-24b-instruct:free");
    }

    #[test]
    fn test_with_model_override() {
        let client = OpenRouterClient::new("test-key".to_string())
            .unwrap()
            .with_model("meta-llama/llama-3.3-70b-instruct".to_string());
        assert_eq!(client.model(), "meta-llama/llama-3.3-70b-instruct");
    }
}
