use thiserror::Error;

/// Errors that can occur during script generation
#[derive(Debug, Error)]
pub enum LlmError {
    /// Completion arrived without usable text
    #[error("completion contained no text")]
    EmptyCompletion,

    /// Request never reached the provider or the connection dropped
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    Api {
        /// HTTP status from the provider
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Provider answered with a body outside the expected wire format
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
