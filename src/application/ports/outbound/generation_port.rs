use async_trait::async_trait;

/// Why a call to the generation service produced no usable body
///
/// All variants collapse into the same user-facing fallback message; the
/// distinction only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Generation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response body: {0}")]
    Decode(String),
}

/// The external text-generation service
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// POST an already-serialized JSON `body` to `path` and return the parsed
    /// JSON response. Resolves exactly once; no retries.
    async fn post_json(&self, path: &str, body: String)
        -> Result<serde_json::Value, GenerationError>;
}
