use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Chat-completion upstream configuration (OpenAI-compatible)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// API key for the completion service
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (any OpenAI-compatible endpoint)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model used for script generation
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature for script generation
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound on completion tokens, before the per-request budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.8
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    2000
}
