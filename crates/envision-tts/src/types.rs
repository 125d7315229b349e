/// Speech synthesis request
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    pub input: String,
    /// Voice identifier (e.g. "nova" or "echo")
    pub voice: String,
}

/// Raw audio response from a TTS provider
#[derive(Debug)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}
