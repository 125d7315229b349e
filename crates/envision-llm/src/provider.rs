pub mod openai;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{Completion, CompletionRequest};

/// Trait implemented by chat-completion backends
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Request a completion and return the first choice
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmError>;
}
