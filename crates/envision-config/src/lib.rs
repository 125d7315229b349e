#![allow(clippy::must_use_candidate)]

mod cors;
mod env;
mod health;
mod llm;
mod loader;
mod server;
mod session;
mod storage;
mod tts;

use serde::Deserialize;

pub use cors::{AnyOrArray, CorsConfig};
pub use health::HealthConfig;
pub use llm::LlmConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
pub use storage::{RetentionConfig, StorageConfig};
pub use tts::TtsConfig;

/// Top-level Envision configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Chat-completion upstream configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Speech-synthesis upstream configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Session pipeline defaults
    #[serde(default)]
    pub session: SessionConfig,
    /// Audio artifact storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}
