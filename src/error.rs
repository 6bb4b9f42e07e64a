//! Error Handling Module
//!
//! Error types for the Cerebras provider:
//! - `LlmError`, the single error type returned by every fallible operation
//! - HTTP error classification for the OpenAI-style `{ "error": { ... } }` envelope
//! - Conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use siumai_provider_cerebras::error::LlmError;
//!
//! let error = LlmError::provider("cerebras", "model not found", Some(404));
//! assert_eq!(error.status_code(), Some(404));
//! assert!(!error.is_retryable());
//! ```

use serde_json::Value;
use thiserror::Error;

/// Errors produced by the Cerebras provider.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// Required configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The provider call failed at the transport level or returned an error response.
    #[error("{name} API error: {message}", name = display_provider(.provider))]
    ProviderError {
        provider: String,
        message: String,
        /// HTTP status, when the provider answered at all
        status: Option<u16>,
    },

    /// Transport-level failure without a structured response.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The provider answered with a body the adapter does not understand.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The event stream was interrupted.
    #[error("Stream error: {0}")]
    StreamError(String),
}

fn display_provider(provider: &str) -> String {
    let mut chars = provider.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl LlmError {
    /// Build a `ProviderError`.
    pub fn provider(
        provider: impl Into<String>,
        message: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Self::ProviderError {
            provider: provider.into(),
            message: message.into(),
            status,
        }
    }

    /// HTTP status attached to this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ProviderError { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether a caller could reasonably retry. This crate never retries itself.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ProviderError {
                status: Some(code), ..
            } => *code == 408 || *code == 429 || *code >= 500,
            Self::ProviderError { status: None, .. } | Self::HttpError(_) => true,
            _ => false,
        }
    }
}

/// Extract the provider's error message from a response body.
///
/// Looks at the OpenAI-style envelope (`error.message`) first, then at a
/// top-level `message` as Cerebras sends it. The top-level fallback goes
/// beyond the `error.message` envelope the other adapters read. Returns
/// `None` when the body isn't JSON or carries no string message.
pub fn extract_error_message(body_text: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body_text).ok()?;
    json.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .or_else(|| json.get("message").and_then(Value::as_str))
        .map(str::to_string)
}

/// Classify a non-success HTTP response into a `ProviderError`.
///
/// The provider's own message wins; otherwise the generic transport wording
/// `Request failed with status code <n>` is used.
pub fn classify_http_error(provider: &str, status: u16, body_text: &str) -> LlmError {
    let message = extract_error_message(body_text)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {status}"));
    LlmError::provider(provider, message, Some(status))
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
