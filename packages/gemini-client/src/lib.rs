//! Minimal Gemini REST client
//!
//! Sends a single `generateContent` request and returns the text the model
//! produced. No domain logic lives here; callers build the prompt and
//! interpret the text.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateContentRequest};
//!
//! let client = GeminiClient::new(api_key).with_model("gemini-2.5-flash");
//! let text = client
//!     .generate_text(&GenerateContentRequest::prompt("Suggest a weekend in Lisbon as JSON"))
//!     .await?;
//! ```

pub mod envelope;
pub mod error;
pub mod types;

pub use envelope::locate_text;
pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send a request and return the raw response envelope.
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> Result<Value> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generateContent"
        );

        Ok(envelope)
    }

    /// Send a request and return the model's text.
    ///
    /// Falls back to the serialized envelope when the text cannot be located.
    pub async fn generate_text(&self, request: &GenerateContentRequest) -> Result<String> {
        let envelope = self.generate_content(request).await?;
        Ok(locate_text(&envelope))
    }
}
