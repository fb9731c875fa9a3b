//! Issue Difficulty Classifier
//!
//! Builds a rubric prompt from the issue fields, tries each configured
//! completion provider in order, and parses a `{"difficulty": ...}` object
//! out of the first response that yields one. Every attempt-path failure
//! (transport, API status, no JSON, malformed JSON) moves on to the next
//! provider; when the list is exhausted, `classify` returns `None` instead
//! of raising.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ClassifierConfig, ConfigError};
use crate::extract::{extract_json, ExtractError};
use crate::prompt::build_prompt;
use crate::provider::{CompletionProvider, MosaiaClient, OpenRouterClient, ProviderError};

/// Output cap for completion calls; the expected response is a one-field
/// JSON object, 500 tokens leaves room for chatty models.
const MAX_COMPLETION_TOKENS: u32 = 500;

/// Fields of the issue to classify. Constructed fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// Issue title.
    pub title: String,

    /// Issue body text.
    pub description: String,

    /// Primary language of the repository (e.g., "Rust", "TypeScript").
    pub language: String,

    /// Issue labels, in display order. May be empty.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl ClassificationRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            language: language.into(),
            labels: vec![],
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }
}

/// Result of a classification call.
///
/// The difficulty string is whatever the model produced; it is not checked
/// against the easy/medium/difficult set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub difficulty: String,
}

/// One failed provider attempt; unifies provider and parse failures so the
/// fallback loop treats them uniformly.
#[derive(Debug, Error)]
enum AttemptError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("response object missing expected fields: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Classifier over an ordered list of completion providers.
pub struct IssueClassifier {
    providers: Vec<Arc<dyn CompletionProvider>>,
}

impl IssueClassifier {
    /// Create a classifier with the standard provider order: Mosaia agent
    /// first, OpenRouter as fallback.
    ///
    /// Fails with [`ConfigError`] when any credential is empty or a client
    /// cannot be built; no network client is built with partial
    /// credentials.
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            providers: vec![
                Arc::new(MosaiaClient::new(
                    config.mosaia_api_key,
                    config.mosaia_agent_id,
                )?),
                Arc::new(OpenRouterClient::new(config.openrouter_api_key)?),
            ],
        })
    }

    /// Create a classifier from an explicit provider list, tried in order.
    pub fn from_providers(providers: Vec<Arc<dyn CompletionProvider>>) -> Self {
        Self { providers }
    }

    /// Classify an issue into a difficulty tier.
    ///
    /// Providers are tried sequentially, never in parallel; the first one
    /// whose response yields a parseable object wins. Returns `None` when
    /// every provider fails -- callers must treat that as "classification
    /// unavailable" and choose their own escalation policy.
    pub async fn classify(&self, request: &ClassificationRequest) -> Option<Classification> {
        let prompt = build_prompt(request);

        for provider in &self.providers {
            match self.attempt(provider.as_ref(), &prompt).await {
                Ok(classification) => {
                    tracing::info!(
                        provider = provider.name(),
                        difficulty = %classification.difficulty,
                        "issue classified"
                    );
                    return Some(classification);
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        "classification attempt failed"
                    );
                }
            }
        }

        None
    }

    async fn attempt(
        &self,
        provider: &dyn CompletionProvider,
        prompt: &str,
    ) -> Result<Classification, AttemptError> {
        let text = provider.complete(prompt, MAX_COMPLETION_TOKENS).await?;
        tracing::debug!(provider = provider.name(), response = %text, "raw model response");

        let value = extract_json(&text)?;
        Ok(serde_json::from_value(value)?)
    }
}
