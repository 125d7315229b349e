use axum::{
    Json,
    response::{IntoResponse, Response},
};
use envision_llm::LlmError;
use envision_store::StoreError;
use envision_tts::TtsError;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Errors from the session pipeline, tagged by stage
#[derive(Debug, Error)]
pub enum SessionError {
    /// Request body failed to parse as JSON
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Sport, session type, or scenario is absent or blank
    #[error("missing required fields")]
    MissingFields,

    /// Script generation failed
    #[error("script generation failed: {0}")]
    Generation(#[from] LlmError),

    /// Speech synthesis failed
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] TtsError),

    /// Generated audio could not be persisted
    #[error("artifact persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

impl SessionError {
    /// Pipeline stage the error came from, for logs
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) | Self::MissingFields => "validate",
            Self::Generation(_) => "generate",
            Self::Synthesis(_) => "synthesize",
            Self::Persistence(_) => "persist",
        }
    }

    /// HTTP status for the client
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::Generation(_) | Self::Synthesis(_) | Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the client
    ///
    /// Clients key on these fixed strings; upstream detail stays in the
    /// logs. A contentless completion is the one generation failure with
    /// its own message.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidBody(detail) => detail.clone(),
            Self::MissingFields => "Missing required fields".to_owned(),
            Self::Generation(LlmError::EmptyCompletion) => "Failed to generate script".to_owned(),
            Self::Generation(_) | Self::Synthesis(_) | Self::Persistence(_) => {
                "Failed to generate session".to_owned()
            }
        }
    }
}

/// Wire shape for every error payload
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        tracing::error!(stage = self.stage(), error = %self, "session request failed");

        let body = ErrorBody {
            error: self.client_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Sample endpoint failure; every cause collapses to one message
#[derive(Debug)]
pub struct SampleError(pub SessionError);

impl From<SessionError> for SampleError {
    fn from(err: SessionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SampleError {
    fn into_response(self) -> Response {
        tracing::error!(stage = self.0.stage(), error = %self.0, "sample generation failed");

        let body = ErrorBody {
            error: "Failed to generate sample".to_owned(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
