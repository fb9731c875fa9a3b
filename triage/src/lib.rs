//! Triage - GitHub issue difficulty classification
//!
//! This library sends a constructed prompt describing a GitHub issue to an
//! AI completion provider and parses a difficulty tier (easy / medium /
//! difficult) out of the free-text response. A secondary provider is tried
//! when the primary fails, and the whole call degrades to `None` rather
//! than raising when every provider is exhausted.
//!
//! # Quick Start
//!
//! ```no_run
//! use triage::{ClassificationRequest, ClassifierConfig, IssueClassifier};
//!
//! # async fn run() {
//! let config = ClassifierConfig::from_env();
//! let classifier = IssueClassifier::new(config).unwrap();
//!
//! let request = ClassificationRequest::new(
//!     "Fix typo in README",
//!     "The word 'recieve' appears twice in the install section.",
//!     "Rust",
//! );
//!
//! match classifier.classify(&request).await {
//!     Some(result) => println!("difficulty: {}", result.difficulty),
//!     None => eprintln!("classification unavailable"),
//! }
//! # }
//! ```
//!
//! # Features
//!
//! - **Prompt construction**: deterministic rubric-based prompt template
//! - **Provider fallback**: ordered provider list tried until one yields
//!   a parseable result
//! - **Tolerant parsing**: JSON object extraction from free-form model
//!   output (code fences, surrounding prose)

pub mod classifier;
pub mod config;
pub mod extract;
pub mod prompt;
pub mod provider;

// Re-export main types
pub use classifier::{Classification, ClassificationRequest, IssueClassifier};
pub use config::{ClassifierConfig, ConfigError};
pub use extract::{extract_json, ExtractError};
pub use prompt::build_prompt;
pub use provider::{CompletionProvider, ProviderError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Classification, ClassificationRequest, ClassifierConfig, ConfigError, IssueClassifier,
    };
}
