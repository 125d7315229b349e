//! Filesystem persistence for generated audio artifacts
//!
//! Session artifacts are named `audio-<unix-millis>.mp3` under a configured
//! directory and exposed through a public URL prefix. Fixed-name artifacts
//! (the seeded sample) live in the same directory but are never swept.

#![allow(clippy::must_use_candidate)]

mod error;
mod retention;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use envision_config::StorageConfig;
use jiff::Timestamp;

pub use error::StoreError;
pub use retention::{RetentionPolicy, run_sweeper, sweep};

pub(crate) const SESSION_FILE_PREFIX: &str = "audio-";
pub(crate) const AUDIO_EXTENSION: &str = ".mp3";

/// A persisted audio file and the URL it is reachable at
#[derive(Debug, Clone)]
pub struct StoredAudio {
    /// File name within the audio directory
    pub filename: String,
    /// Public URL path for the file
    pub url: String,
}

/// Store for generated audio files
pub struct ArtifactStore {
    audio_dir: PathBuf,
    public_path: String,
    last_stamp: AtomicI64,
}

impl ArtifactStore {
    /// Create a store over the configured audio directory
    ///
    /// The directory itself is created lazily on first write.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            audio_dir: config.audio_dir.clone(),
            public_path: config.public_path.trim_end_matches('/').to_owned(),
            last_stamp: AtomicI64::new(0),
        }
    }

    /// Directory that holds the audio files
    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    /// Public URL path for a file in the audio directory
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/{filename}", self.public_path)
    }

    /// Whether a file with this name already exists
    pub async fn exists(&self, filename: &str) -> bool {
        tokio::fs::try_exists(self.audio_dir.join(filename))
            .await
            .unwrap_or(false)
    }

    /// Persist session audio under a fresh timestamp-derived name
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the directory cannot be created or the
    /// file cannot be written.
    pub async fn put_session_audio(&self, audio: &[u8]) -> Result<StoredAudio, StoreError> {
        let filename = format!("{SESSION_FILE_PREFIX}{}{AUDIO_EXTENSION}", self.next_timestamp());
        self.put_named(&filename, audio).await
    }

    /// Persist audio under a caller-chosen name, replacing any previous file
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the directory cannot be created or the
    /// file cannot be written.
    pub async fn put_named(&self, filename: &str, audio: &[u8]) -> Result<StoredAudio, StoreError> {
        tokio::fs::create_dir_all(&self.audio_dir)
            .await
            .map_err(|source| StoreError::CreateDir {
                dir: self.audio_dir.clone(),
                source,
            })?;

        let path = self.audio_dir.join(filename);

        tokio::fs::write(&path, audio)
            .await
            .map_err(|source| StoreError::Write {
                file: path.clone(),
                source,
            })?;

        tracing::info!(file = %path.display(), bytes = audio.len(), "audio artifact written");

        Ok(StoredAudio {
            filename: filename.to_owned(),
            url: self.public_url(filename),
        })
    }

    /// Next millisecond stamp, strictly above every stamp issued before
    ///
    /// Same-millisecond writers bump past the last issued value so the
    /// derived filenames never collide within this process.
    fn next_timestamp(&self) -> i64 {
        let now = Timestamp::now().as_millisecond();
        let mut last = self.last_stamp.load(Ordering::Relaxed);

        loop {
            let next = now.max(last + 1);
            match self
                .last_stamp
                .compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(observed) => last = observed,
            }
        }
    }
}

/// Parse the millisecond stamp out of a session artifact name
pub(crate) fn session_stamp(filename: &str) -> Option<i64> {
    filename
        .strip_prefix(SESSION_FILE_PREFIX)?
        .strip_suffix(AUDIO_EXTENSION)?
        .parse()
        .ok()
}
