//! Request headers for the Cerebras API.

use crate::config::CerebrasConfig;
use crate::error::LlmError;
use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use std::collections::HashMap;

/// HTTP header builder for API requests
#[derive(Debug, Default)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, LlmError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| LlmError::ConfigurationError(format!("Invalid API key format: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, LlmError> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| LlmError::ConfigurationError(format!("Invalid user agent: {e}")))?,
        );
        Ok(self)
    }

    /// Add extra headers. These never override authorization or content type.
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, LlmError> {
        for (key, value) in custom_headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header name '{key}': {e}"))
            })?;
            if name == AUTHORIZATION || name == CONTENT_TYPE {
                continue;
            }
            let value = HeaderValue::from_str(value).map_err(|e| {
                LlmError::ConfigurationError(format!("Invalid header value for '{key}': {e}"))
            })?;
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

/// Headers for a chat-completion request.
pub fn build_headers(config: &CerebrasConfig) -> Result<HeaderMap, LlmError> {
    use secrecy::ExposeSecret;

    let mut builder = HttpHeaderBuilder::new()
        .with_custom_headers(&config.http_config.headers)?
        .with_bearer_auth(config.api_key.expose_secret())?
        .with_json_content_type();
    if let Some(user_agent) = &config.http_config.user_agent {
        builder = builder.with_user_agent(user_agent)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        let config = CerebrasConfig::new("test-key");
        let headers = build_headers(&config).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-key");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn custom_headers_cannot_replace_auth() {
        let mut config = CerebrasConfig::new("test-key");
        config
            .http_config
            .headers
            .insert("Authorization".into(), "Bearer other".into());
        config
            .http_config
            .headers
            .insert("X-Request-Source".into(), "host".into());
        config.http_config.user_agent = Some("host-app/1.0".into());

        let headers = build_headers(&config).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-key");
        assert_eq!(headers.get("x-request-source").unwrap(), "host");
        assert_eq!(headers.get(USER_AGENT).unwrap(), "host-app/1.0");
    }

    #[test]
    fn invalid_key_is_configuration_error() {
        let config = CerebrasConfig::new("bad\nkey");
        assert!(matches!(
            build_headers(&config),
            Err(LlmError::ConfigurationError(_))
        ));
    }
}
