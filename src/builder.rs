//! `Cerebras` Builder Implementation
//!
//! Provides a builder pattern for creating `Cerebras` clients.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::client::CerebrasClient;
use crate::config::CerebrasConfig;
use crate::error::LlmError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::ModelInfo;

/// Environment variable consulted when no API key is set explicitly.
pub const API_KEY_ENV: &str = "CEREBRAS_API_KEY";

/// `Cerebras` Client Builder
#[derive(Clone, Default)]
pub struct CerebrasBuilder {
    config: CerebrasConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl CerebrasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.config.api_key = SecretString::from(api_key.into());
        self
    }

    /// Set the base URL
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the model
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.config.model_id = Some(model.into());
        self
    }

    /// Set the model metadata used for `get_model` and cost estimates
    pub fn model_info(mut self, info: ModelInfo) -> Self {
        self.config.model_info = Some(info);
        self
    }

    // === HTTP Configuration ===

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.http_config.user_agent = Some(user_agent.into());
        self
    }

    /// Add one extra request header
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config
            .http_config
            .headers
            .insert(key.into(), value.into());
        self
    }

    /// Add extra request headers
    pub fn custom_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.config.http_config.headers.extend(headers);
        self
    }

    /// Set custom HTTP client. Timeouts set on this builder are then ignored.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the HTTP transport entirely.
    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the `Cerebras` client
    pub fn build(self) -> Result<CerebrasClient, LlmError> {
        let mut config = self.config;

        // explicit key > environment
        if config.api_key.expose_secret().is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                config.api_key = SecretString::from(key);
            }
        }

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(ReqwestTransport::new(config.http_config.build_client()?)),
        };

        CerebrasClient::with_transport(config, transport)
    }
}

impl std::fmt::Debug for CerebrasBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CerebrasBuilder")
            .field("config", &self.config)
            .field("custom_http_client", &self.http_client.is_some())
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::traits::ApiHandler;

    #[test]
    fn test_builder_creation() {
        let builder = CerebrasBuilder::new();
        assert_eq!(builder.config.base_url, "https://api.cerebras.ai/v1");
        assert!(builder.config.api_key.expose_secret().is_empty());
        assert_eq!(builder.config.model_id(), "llama-3.3-70b");
    }

    #[test]
    fn test_builder_configuration() {
        let builder = CerebrasBuilder::new()
            .api_key("test-key")
            .model("llama3.1-8b")
            .timeout(Duration::from_secs(30))
            .header("X-Trace", "abc")
            .model_info(ModelInfo {
                input_price: Some(0.0001),
                ..Default::default()
            });

        assert_eq!(builder.config.api_key.expose_secret(), "test-key");
        assert_eq!(builder.config.model_id(), "llama3.1-8b");
        assert_eq!(
            builder.config.http_config.timeout,
            Some(Duration::from_secs(30))
        );
        assert_eq!(
            builder.config.http_config.headers.get("X-Trace"),
            Some(&"abc".to_string())
        );

        let client = builder.build().unwrap();
        assert_eq!(client.get_model().unwrap().id, "llama3.1-8b");
    }

    #[test]
    fn test_builder_validation() {
        // Temporarily remove API key from environment
        let original_key = std::env::var(API_KEY_ENV).ok();
        unsafe {
            std::env::remove_var(API_KEY_ENV);
        }

        let missing_key = CerebrasBuilder::new().build();
        let bad_url = CerebrasBuilder::new()
            .api_key("test-key")
            .base_url("localhost:1234")
            .build();

        unsafe {
            std::env::set_var(API_KEY_ENV, "env-key");
        }
        let from_env = CerebrasBuilder::new().build();
        let explicit = CerebrasBuilder::new().api_key("explicit-key").build();

        // Restore original key if it existed
        unsafe {
            match original_key {
                Some(key) => std::env::set_var(API_KEY_ENV, key),
                None => std::env::remove_var(API_KEY_ENV),
            }
        }

        assert!(matches!(missing_key, Err(LlmError::ConfigurationError(_))));
        assert!(matches!(bad_url, Err(LlmError::ConfigurationError(_))));
        assert_eq!(
            from_env.unwrap().config().api_key.expose_secret(),
            "env-key"
        );
        assert_eq!(
            explicit.unwrap().config().api_key.expose_secret(),
            "explicit-key"
        );
    }
}
