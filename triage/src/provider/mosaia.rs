//! Primary provider: Mosaia agent completions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::provider::{ChatRequest, ChatResponse, CompletionProvider, ProviderError};

const MOSAIA_API_URL: &str = "https://api.mosaia.ai/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for the Mosaia agent API.
///
/// The agent id is passed as the model identifier on the OpenAI-compatible
/// completions endpoint.
pub struct MosaiaClient {
    client: Client,
    api_key: String,
    agent_id: String,
}

impl MosaiaClient {
    /// Fails only when the underlying HTTP client cannot be built; a
    /// default client without the request timeout is never substituted.
    pub fn new(api_key: String, agent_id: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            agent_id,
        })
    }

    /// Get the targeted agent id.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }
}

#[async_trait]
impl CompletionProvider for MosaiaClient {
    fn name(&self) -> &str {
        "mosaia"
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError> {
        let body = ChatRequest::user(&self.agent_id, prompt, max_tokens);

        tracing::debug!(agent_id = %self.agent_id, "sending completion request to Mosaia");

        let response = self
            .client
            .post(MOSAIA_API_URL)
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
    fn test_construction_with_timeout_succeeds() {
        let client = MosaiaClient::new("test-key".to_string(), "agent-1".to_string()).unwrap();
        assert_eq!(client.agent_id(), "agent-1");
    }
}
