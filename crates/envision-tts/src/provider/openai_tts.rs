use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::SpeechProvider;
use crate::{
    error::TtsError,
    http_client::http_client,
    types::{SpeechRequest, SpeechResponse},
};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` TTS provider
pub(crate) struct OpenAiTtsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiTtsProvider {
    pub fn new(api_key: SecretString, base_url: Option<String>, model: String) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }
}

#[derive(serde::Serialize)]
struct OpenAiTtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}

#[async_trait]
impl SpeechProvider for OpenAiTtsProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/audio/speech", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            "TTS request: model={}, voice={}, input_len={}",
            self.model,
            request.voice,
            request.input.len(),
        );

        let body = OpenAiTtsRequest {
            model: &self.model,
            input: &request.input,
            voice: &request.voice,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("TTS request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to TTS provider: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("TTS API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => TtsError::AuthenticationFailed(error_text),
                400 => TtsError::InvalidRequest(error_text),
                _ => TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read TTS response body: {e}");
            TtsError::ResponseRead(e.to_string())
        })?;

        tracing::debug!("TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechResponse {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }
}
