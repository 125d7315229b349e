use std::path::PathBuf;

use serde::Deserialize;

/// Audio artifact storage configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory where generated audio files are written
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
    /// URL path prefix under which the directory is served
    #[serde(default = "default_public_path")]
    pub public_path: String,
    /// Retention policy for session artifacts (unbounded when absent)
    #[serde(default)]
    pub retention: Option<RetentionConfig>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            public_path: default_public_path(),
            retention: None,
        }
    }
}

/// Retention policy for session artifacts
///
/// The fixed-name sample artifact is never subject to retention.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetentionConfig {
    /// Keep at most this many session artifacts (oldest deleted first)
    #[serde(default)]
    pub max_files: Option<u64>,
    /// Delete session artifacts older than this (e.g. "7d", "12h")
    #[serde(default)]
    pub max_age: Option<String>,
    /// How often the sweep runs (e.g. "5m")
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: String,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("public/audio")
}

fn default_public_path() -> String {
    "/audio".to_string()
}

fn default_sweep_interval() -> String {
    "5m".to_string()
}
