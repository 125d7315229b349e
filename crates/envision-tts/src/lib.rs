#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod types;

use envision_config::TtsConfig;

use provider::openai_tts::OpenAiTtsProvider;
pub use error::{Result, TtsError};
pub use provider::SpeechProvider;
pub use types::{SpeechRequest, SpeechResponse};

/// Hard character ceiling accepted by speech synthesis APIs
pub const MAX_INPUT_CHARS: usize = 4096;

/// Speech synthesizer that routes requests through a provider
///
/// Every request is capped at [`MAX_INPUT_CHARS`] characters before it
/// reaches the provider, independent of any budget applied upstream.
pub struct SpeechSynthesizer {
    provider: Box<dyn SpeechProvider>,
}

impl std::fmt::Debug for SpeechSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechSynthesizer").finish_non_exhaustive()
    }
}

impl SpeechSynthesizer {
    /// Create a synthesizer over an arbitrary provider
    pub fn new(provider: Box<dyn SpeechProvider>) -> Self {
        Self { provider }
    }

    /// Create a synthesizer over the OpenAI-compatible provider from configuration
    ///
    /// # Errors
    ///
    /// Returns `TtsError::MissingApiKey` when no API key is configured.
    pub fn from_config(config: &TtsConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(TtsError::MissingApiKey)?;

        Ok(Self::new(Box::new(OpenAiTtsProvider::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
        ))))
    }

    /// Synthesize speech for the request
    pub async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse> {
        let request = truncate_input(request, MAX_INPUT_CHARS);

        self.provider.synthesize(&request).await
    }
}

/// Cap the request input at `limit` characters (character count, not bytes)
fn truncate_input(mut request: SpeechRequest, limit: usize) -> SpeechRequest {
    if let Some((offset, _)) = request.input.char_indices().nth(limit) {
        request.input.truncate(offset);
    }
    request
}
