//! Staged pipeline from inbound request to stored narration
//!
//! Stages run strictly in order: validate, build prompt, generate script,
//! synthesize audio, persist. Synthesis only ever sees generated text, and
//! nothing is written unless synthesis succeeded. The response carries the
//! full script even when synthesis received a truncated copy.

use std::sync::Arc;

use envision_config::Config;
use envision_llm::{CompletionRequest, ScriptGenerator};
use envision_store::ArtifactStore;
use envision_tts::{SpeechRequest, SpeechSynthesizer};

use crate::error::SessionError;
use crate::types::{SampleResponse, SessionRequest, SessionResponse, session_title};
use crate::{prompt, sample};

/// Orchestrates generation, synthesis, and persistence for one deployment
pub struct SessionService {
    generator: ScriptGenerator,
    synthesizer: SpeechSynthesizer,
    store: Arc<ArtifactStore>,
    temperature: f64,
    max_tokens_cap: u32,
    default_duration: u32,
}

impl SessionService {
    /// Build the service from configuration
    ///
    /// # Errors
    ///
    /// Fails when the synthesizer cannot be constructed, e.g. without an
    /// API key.
    pub fn new(config: &Config, store: Arc<ArtifactStore>) -> envision_tts::Result<Self> {
        Ok(Self {
            generator: ScriptGenerator::from_config(&config.llm),
            synthesizer: SpeechSynthesizer::from_config(&config.tts)?,
            store,
            temperature: config.llm.temperature,
            max_tokens_cap: config.llm.max_tokens,
            default_duration: config.session.default_duration_minutes,
        })
    }

    /// Run the full pipeline for one session request
    ///
    /// # Errors
    ///
    /// Returns a stage-tagged `SessionError`; the HTTP layer decides what
    /// the client sees.
    pub async fn generate_session(&self, request: SessionRequest) -> Result<SessionResponse, SessionError> {
        let session = request.validate(self.default_duration)?;

        let target_chars = prompt::target_chars(session.duration_minutes);

        let completion = CompletionRequest {
            system: prompt::SYSTEM_PROMPT.to_owned(),
            prompt: prompt::build_prompt(&session, target_chars),
            temperature: self.temperature,
            max_tokens: prompt::max_tokens(target_chars, self.max_tokens_cap),
        };

        let script = self.generator.generate(&completion).await?;

        tracing::debug!(chars = script.chars().count(), target = target_chars, "script generated");

        let speech = self
            .synthesizer
            .synthesize(SpeechRequest {
                input: script.clone(),
                voice: session.voice_style.voice().to_owned(),
            })
            .await?;

        let stored = self.store.put_session_audio(&speech.audio).await?;

        tracing::info!(
            file = %stored.filename,
            sport = %session.sport,
            session_type = session.session_type.wire_name(),
            duration_minutes = session.duration_minutes,
            "visualization session generated"
        );

        Ok(SessionResponse {
            title: session_title(session.session_type, &session.sport),
            duration: format!("{} min", session.duration_minutes),
            audio_url: stored.url,
            script,
        })
    }

    /// Seed the boxing demonstration sample, or report the existing one
    ///
    /// # Errors
    ///
    /// Returns a stage-tagged `SessionError` when synthesis or persistence
    /// fails; the existence check itself cannot fail.
    pub async fn generate_sample(&self) -> Result<SampleResponse, SessionError> {
        if self.store.exists(sample::SAMPLE_FILENAME).await {
            return Ok(SampleResponse::existing(self.store.public_url(sample::SAMPLE_FILENAME)));
        }

        let speech = self
            .synthesizer
            .synthesize(SpeechRequest {
                input: sample::SAMPLE_SCRIPT.to_owned(),
                voice: sample::SAMPLE_VOICE.to_owned(),
            })
            .await?;

        let stored = self.store.put_named(sample::SAMPLE_FILENAME, &speech.audio).await?;

        tracing::info!(file = %stored.filename, "sample audio seeded");

        Ok(SampleResponse::created(stored.url))
    }
}
