//! Mock OpenAI-compatible backend for integration tests
//!
//! Serves canned chat-completion and speech responses and records what each
//! upstream endpoint received

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Audio bytes returned for every speech request
pub const MOCK_AUDIO: &[u8] = b"mock mp3 bytes";

const DEFAULT_SCRIPT: &str = "Close your eyes and picture the arena.";

/// Mock upstream serving both chat completions and speech
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockUpstreamState>,
}

struct MockUpstreamState {
    completion_count: AtomicU32,
    speech_count: AtomicU32,
    fail_completions: bool,
    fail_speech: bool,
    script: String,
    last_prompt: Mutex<Option<String>>,
    last_max_tokens: Mutex<Option<u32>>,
    last_speech: Mutex<Option<SpeechRequest>>,
}

impl MockUpstream {
    /// Start the mock with a canned script
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(DEFAULT_SCRIPT.to_owned(), false, false).await
    }

    /// Start a mock whose completions carry the given script
    pub async fn start_with_script(script: &str) -> anyhow::Result<Self> {
        Self::start_inner(script.to_owned(), false, false).await
    }

    /// Start a mock that fails every chat completion with 500
    pub async fn start_failing_completions() -> anyhow::Result<Self> {
        Self::start_inner(DEFAULT_SCRIPT.to_owned(), true, false).await
    }

    /// Start a mock that fails every speech request with 500
    pub async fn start_failing_speech() -> anyhow::Result<Self> {
        Self::start_inner(DEFAULT_SCRIPT.to_owned(), false, true).await
    }

    async fn start_inner(script: String, fail_completions: bool, fail_speech: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockUpstreamState {
            completion_count: AtomicU32::new(0),
            speech_count: AtomicU32::new(0),
            fail_completions,
            fail_speech,
            script,
            last_prompt: Mutex::new(None),
            last_max_tokens: Mutex::new(None),
            last_speech: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as an upstream
    ///
    /// Includes `/v1` since providers append paths like `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Number of speech requests received
    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    /// User prompt from the most recent completion request
    pub fn last_prompt(&self) -> Option<String> {
        self.state.last_prompt.lock().unwrap().clone()
    }

    /// Token budget from the most recent completion request
    pub fn last_max_tokens(&self) -> Option<u32> {
        *self.state.last_max_tokens.lock().unwrap()
    }

    /// Voice from the most recent speech request
    pub fn last_speech_voice(&self) -> Option<String> {
        self.state.last_speech.lock().unwrap().as_ref().map(|r| r.voice.clone())
    }

    /// Input length in characters from the most recent speech request
    pub fn last_speech_chars(&self) -> Option<usize> {
        self.state
            .last_speech
            .lock()
            .unwrap()
            .as_ref()
            .map(|r| r.input.chars().count())
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Wire types matching OpenAI format --

#[derive(Debug, Deserialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(default)]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionResponse {
    id: String,
    object: String,
    created: u64,
    model: String,
    choices: Vec<Choice>,
    usage: Usage,
}

#[derive(Debug, Serialize)]
struct Choice {
    index: u32,
    message: ResponseMessage,
    finish_reason: String,
}

#[derive(Debug, Serialize)]
struct ResponseMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct SpeechRequest {
    #[allow(dead_code)]
    model: String,
    input: String,
    voice: String,
}

// -- Handlers --

async fn handle_chat_completions(
    State(state): State<Arc<MockUpstreamState>>,
    Json(req): Json<ChatCompletionRequest>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    let prompt = req.messages.iter().rev().find(|m| m.role == "user").map(|m| m.content.clone());
    *state.last_prompt.lock().unwrap() = prompt;
    *state.last_max_tokens.lock().unwrap() = req.max_tokens;

    if state.fail_completions {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": {
                    "message": "mock server intentional failure",
                    "type": "server_error"
                }
            })),
        )
            .into_response();
    }

    let response = ChatCompletionResponse {
        id: "chatcmpl-test-123".to_owned(),
        object: "chat.completion".to_owned(),
        created: 1_700_000_000,
        model: req.model,
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: "assistant".to_owned(),
                content: state.script.clone(),
            },
            finish_reason: "stop".to_owned(),
        }],
        usage: Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        },
    };

    Json(response).into_response()
}

async fn handle_speech(
    State(state): State<Arc<MockUpstreamState>>,
    Json(req): Json<SpeechRequest>,
) -> impl IntoResponse {
    state.speech_count.fetch_add(1, Ordering::Relaxed);
    *state.last_speech.lock().unwrap() = Some(req);

    if state.fail_speech {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock speech failure").into_response();
    }

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "audio/mpeg")],
        MOCK_AUDIO.to_vec(),
    )
        .into_response()
}
