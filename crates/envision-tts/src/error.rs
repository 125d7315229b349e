use thiserror::Error;

/// Convenience alias for synthesis results
pub type Result<T> = std::result::Result<T, TtsError>;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum TtsError {
    /// Request never reached the provider or the connection dropped
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Provider rejected the credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider rejected the request as malformed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider answered with an unexpected status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError {
        /// HTTP status from the provider
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// No API key configured for speech synthesis
    #[error("no API key configured for speech synthesis")]
    MissingApiKey,

    /// Audio body could not be read from the provider response
    #[error("failed to read audio response: {0}")]
    ResponseRead(String),
}
