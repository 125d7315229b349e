use secrecy::SecretString;
use serde::Deserialize;

/// Speech-synthesis upstream configuration (OpenAI-compatible)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// API key for the speech service
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model used for narration
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "tts-1".to_string()
}
