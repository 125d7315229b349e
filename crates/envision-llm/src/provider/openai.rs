//! OpenAI-compatible chat-completion provider

use async_trait::async_trait;
use envision_config::LlmConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::CompletionProvider;
use crate::error::LlmError;
use crate::protocol::{OpenAiMessage, OpenAiRequest, OpenAiResponse};
use crate::types::{Completion, CompletionRequest};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible chat-completion provider
pub struct OpenAiProvider {
    client: Client,
    base_url: Option<Url>,
    api_key: Option<SecretString>,
    model: String,
}

impl OpenAiProvider {
    /// Create from the `[llm]` configuration section
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self
            .base_url
            .as_ref()
            .map_or(DEFAULT_BASE_URL, Url::as_str)
            .trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, LlmError> {
        let wire_request = OpenAiRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_owned(),
                    content: request.system.clone(),
                },
                OpenAiMessage {
                    role: "user".to_owned(),
                    content: request.prompt.clone(),
                },
            ],
            temperature: Some(request.temperature),
            max_tokens: Some(request.max_tokens),
        };

        let mut builder = self.client.post(self.completions_url()).json(&wire_request);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "completion request failed");
            LlmError::Connection(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "completion provider returned error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let wire_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        if let Some(usage) = &wire_response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "completion usage"
            );
        }

        Ok(wire_response.into())
    }
}
