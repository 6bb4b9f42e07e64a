//! `Cerebras` Configuration
//!
//! This module provides configuration structures for the `Cerebras` provider.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::error::LlmError;
use crate::models::DEFAULT_MODEL;
use crate::types::ModelInfo;
use secrecy::{ExposeSecret, SecretString};

/// Default Cerebras API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai/v1";

/// HTTP client configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpConfig {
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
    /// User agent
    pub user_agent: Option<String>,
}

impl HttpConfig {
    /// Build a `reqwest::Client` honoring this configuration.
    pub fn build_client(&self) -> Result<reqwest::Client, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        builder.build().map_err(|e| {
            LlmError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
        })
    }
}

/// `Cerebras` provider configuration.
///
/// Read-only once a client has been built from it.
///
/// # Example
/// ```rust,ignore
/// use siumai_provider_cerebras::{CerebrasConfig, ModelInfo};
///
/// let config = CerebrasConfig::new("your-api-key")
///     .with_model("llama-3.3-70b")
///     .with_model_info(ModelInfo {
///         input_price: Some(0.0001),
///         output_price: Some(0.0002),
///         ..Default::default()
///     });
/// ```
#[derive(Clone)]
pub struct CerebrasConfig {
    /// `Cerebras` API key (securely stored)
    pub api_key: SecretString,

    /// Base URL for the `Cerebras` API
    pub base_url: String,

    /// Model id; `None` or an empty id selects the default model
    pub model_id: Option<String>,

    /// Host-supplied model metadata and pricing
    pub model_info: Option<ModelInfo>,

    /// HTTP configuration
    pub http_config: HttpConfig,
}

impl CerebrasConfig {
    /// Create a new configuration with the given API key and the default model.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Self::default()
        }
    }

    /// Set the base URL for the `Cerebras` API.
    pub fn with_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model id.
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model_id = Some(model.into());
        self
    }

    /// Set the model metadata.
    pub fn with_model_info(mut self, info: ModelInfo) -> Self {
        self.model_info = Some(info);
        self
    }

    /// Set the HTTP configuration.
    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Effective model id, falling back to the default model when unset or empty.
    pub fn model_id(&self) -> &str {
        self.model_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Chat-completion endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Get the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key.expose_secret())
    }

    /// Validate the configuration.
    ///
    /// Model id and model info are checked lazily by `get_model`, not here.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(LlmError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }

        if self.base_url.is_empty() {
            return Err(LlmError::ConfigurationError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(LlmError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CerebrasConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model_id: Some(DEFAULT_MODEL.to_string()),
            model_info: None,
            http_config: HttpConfig::default(),
        }
    }
}

impl fmt::Debug for CerebrasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CerebrasConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model_id", &self.model_id)
            .field("model_info", &self.model_info)
            .field("http_config", &self.http_config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CerebrasConfig::new("test-key");
        assert_eq!(config.api_key.expose_secret(), "test-key");
        assert_eq!(config.base_url, "https://api.cerebras.ai/v1");
        assert_eq!(config.model_id(), "llama-3.3-70b");
        assert!(config.model_info.is_none());
    }

    #[test]
    fn test_config_validation() {
        let mut config = CerebrasConfig::new("test-key");
        assert!(config.validate().is_ok());

        config.base_url = "api.cerebras.ai".to_string();
        assert!(config.validate().is_err());

        let config = CerebrasConfig::default();
        assert!(matches!(
            config.validate(),
            Err(LlmError::ConfigurationError(_))
        ));
    }

    #[test]
    fn empty_or_unset_model_id_uses_default() {
        let config = CerebrasConfig::new("k").with_model("");
        assert_eq!(config.model_id(), DEFAULT_MODEL);

        let mut config = CerebrasConfig::new("k");
        config.model_id = None;
        assert_eq!(config.model_id(), DEFAULT_MODEL);

        let config = CerebrasConfig::new("k").with_model("llama3.1-8b");
        assert_eq!(config.model_id(), "llama3.1-8b");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let config = CerebrasConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(
            config.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = CerebrasConfig::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
        assert_eq!(config.auth_header(), "Bearer super-secret");
    }
}
