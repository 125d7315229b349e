/// Inputs for a single completion call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System role instruction
    pub system: String,
    /// User message
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

/// Output of a completion call
#[derive(Debug, Clone)]
pub struct Completion {
    /// Assistant text from the first choice, absent when the provider
    /// returned none
    pub text: Option<String>,
    /// Model that produced the completion
    pub model: String,
}
