use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting audio artifacts
#[derive(Debug, Error)]
pub enum StoreError {
    /// Audio directory could not be created
    #[error("failed to create audio directory {}: {source}", dir.display())]
    CreateDir {
        /// Directory that was being created
        dir: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Artifact could not be written
    #[error("failed to write {}: {source}", file.display())]
    Write {
        /// File that was being written
        file: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
