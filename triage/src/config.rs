//! Classifier configuration.
//!
//! Credentials are injected explicitly rather than read lazily from the
//! process environment inside the classifier; `from_env` exists as the
//! conventional loader for binaries.

use std::env;

use thiserror::Error;

/// Environment variable holding the primary (Mosaia) API key.
pub const MOSAIA_API_KEY_VAR: &str = "MOSAIA_API_KEY";
/// Environment variable holding the primary (Mosaia) agent id.
pub const MOSAIA_AGENT_ID_VAR: &str = "MOSAIA_AGENT_ID";
/// Environment variable holding the fallback (OpenRouter) API key.
pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Construction-time failure; the only error kind allowed to escape
/// classifier creation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: {0} is not set or empty")]
    MissingCredential(&'static str),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Credentials for the classifier's providers.
///
/// Immutable after construction; held for the lifetime of the classifier.
#[derive(Clone)]
pub struct ClassifierConfig {
    /// API key for the primary Mosaia provider.
    pub mosaia_api_key: String,

    /// Agent identifier targeted on the primary provider.
    pub mosaia_agent_id: String,

    /// API key for the OpenRouter fallback provider.
    pub openrouter_api_key: String,
}

impl ClassifierConfig {
    pub fn new(
        mosaia_api_key: impl Into<String>,
        mosaia_agent_id: impl Into<String>,
        openrouter_api_key: impl Into<String>,
    ) -> Self {
        Self {
            mosaia_api_key: mosaia_api_key.into(),
            mosaia_agent_id: mosaia_agent_id.into(),
            openrouter_api_key: openrouter_api_key.into(),
        }
    }

    /// Load credentials from `MOSAIA_API_KEY`, `MOSAIA_AGENT_ID` and
    /// `OPENROUTER_API_KEY`. Unset variables load as empty strings and are
    /// rejected by [`validate`](Self::validate).
    pub fn from_env() -> Self {
        Self {
            mosaia_api_key: env::var(MOSAIA_API_KEY_VAR).unwrap_or_default(),
            mosaia_agent_id: env::var(MOSAIA_AGENT_ID_VAR).unwrap_or_default(),
            openrouter_api_key: env::var(OPENROUTER_API_KEY_VAR).unwrap_or_default(),
        }
    }

    /// Reject empty credentials before any network client is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mosaia_api_key.is_empty() {
            return Err(ConfigError::MissingCredential(MOSAIA_API_KEY_VAR));
        }
        if self.mosaia_agent_id.is_empty() {
            return Err(ConfigError::MissingCredential(MOSAIA_AGENT_ID_VAR));
        }
        if self.openrouter_api_key.is_empty() {
            return Err(ConfigError::MissingCredential(OPENROUTER_API_KEY_VAR));
        }
        Ok(())
    }
}

// Keys stay out of Debug output.
impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("mosaia_api_key", &"***")
            .field("mosaia_agent_id", &self.mosaia_agent_id)
            .field("openrouter_api_key", &"***")
            .finish()
    }
}
