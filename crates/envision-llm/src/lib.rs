//! Chat-completion client for visualization script generation
//!
//! Provides a provider trait with an OpenAI-compatible implementation and a
//! `ScriptGenerator` wrapper that turns contentless completions into errors.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod protocol;
mod provider;
mod types;

use envision_config::LlmConfig;

pub use error::LlmError;
pub use provider::{CompletionProvider, openai::OpenAiProvider};
pub use types::{Completion, CompletionRequest};

/// Script generator backed by a chat-completion provider
pub struct ScriptGenerator {
    provider: Box<dyn CompletionProvider>,
}

impl ScriptGenerator {
    /// Create a generator over an arbitrary provider
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Create a generator over the OpenAI-compatible provider from configuration
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(Box::new(OpenAiProvider::new(config)))
    }

    /// Generate script text
    ///
    /// # Errors
    ///
    /// Returns `LlmError::EmptyCompletion` when the provider answers without
    /// usable text. Provider errors pass through unchanged.
    pub async fn generate(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let completion = self.provider.complete(request).await?;

        tracing::debug!(
            provider = %self.provider.name(),
            model = %completion.model,
            "completion received"
        );

        match completion.text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LlmError::EmptyCompletion),
        }
    }
}
