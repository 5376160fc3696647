//! Failures talking to the Gemini `generateContent` endpoint.

use thiserror::Error;

/// Result type for Gemini client operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// The request never got an HTTP response (DNS, refused connection, TLS)
    #[error("Gemini request failed: {0}")]
    Network(String),

    /// Gemini answered with a non-2xx status, e.g. 400 for a bad request,
    /// 403 for an invalid key, 429 when the quota is exhausted
    #[error("Gemini returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body is not a JSON envelope
    #[error("Gemini response is not JSON: {0}")]
    Parse(String),
}
