//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use envision_config::{Config, ServerConfig, TtsConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and a test TTS key
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                tts: TtsConfig {
                    api_key: Some(SecretString::from("test-key")),
                    ..TtsConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point both upstreams at a mock backend
    pub fn with_upstream(mut self, base_url: &str) -> Self {
        self.config.llm.api_key = Some(SecretString::from("test-key"));
        self.config.llm.base_url = Some(base_url.parse().expect("valid URL"));
        self.config.tts.base_url = Some(base_url.to_owned());
        self
    }

    /// Write generated audio under the given directory
    pub fn with_audio_dir(mut self, dir: &Path) -> Self {
        self.config.storage.audio_dir = dir.to_path_buf();
        self
    }

    /// Set the fallback duration for requests that omit one
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.config.session.default_duration_minutes = minutes;
        self
    }

    /// Remove the TTS API key
    pub fn without_tts_key(mut self) -> Self {
        self.config.tts.api_key = None;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
