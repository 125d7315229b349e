//! Visualization session generation
//!
//! Turns a session request into narrated meditation audio: a chat-completion
//! upstream writes the script, a speech upstream voices it, and the resulting
//! file is persisted for static serving. Also seeds the fixed boxing sample.

#![allow(clippy::must_use_candidate)]

mod error;
mod pipeline;
mod prompt;
mod sample;
mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use envision_config::Config;
use envision_store::ArtifactStore;

pub use error::{SampleError, SessionError};
pub use pipeline::SessionService;
pub use sample::SAMPLE_FILENAME;
pub use types::{SampleResponse, SessionRequest, SessionResponse, SessionType, ValidSession, VoiceStyle};

/// Build the session service from configuration
///
/// # Errors
///
/// Returns an error if the speech synthesizer cannot be initialized, e.g.
/// when no TTS API key is configured
pub fn build_service(config: &Config, store: Arc<ArtifactStore>) -> anyhow::Result<Arc<SessionService>> {
    let service = Arc::new(
        SessionService::new(config, store)
            .map_err(|e| anyhow::anyhow!("Failed to initialize session service: {e}"))?,
    );
    Ok(service)
}

/// Create the endpoint router for visualization sessions
pub fn endpoint_router() -> Router<Arc<SessionService>> {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sample", get(fetch_sample))
}

/// Handle session generation requests
async fn create_session(
    State(service): State<Arc<SessionService>>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, SessionError> {
    let Json(request) = payload.map_err(|rejection| SessionError::InvalidBody(rejection.body_text()))?;

    let response = service.generate_session(request).await?;

    Ok(Json(response))
}

/// Handle sample seeding requests
async fn fetch_sample(State(service): State<Arc<SessionService>>) -> Result<Json<SampleResponse>, SampleError> {
    let response = service.generate_sample().await?;

    Ok(Json(response))
}
