//! `Cerebras` client
//!
//! Builds the chat-completion request, performs the single non-streaming call,
//! and replays the result as a text event followed by a usage event.

use std::sync::Arc;

use crate::builder::CerebrasBuilder;
use crate::config::CerebrasConfig;
use crate::error::{LlmError, classify_http_error};
use crate::headers::build_headers;
use crate::transformers::{
    CerebrasRequestTransformer, CerebrasResponseTransformer, build_outbound_messages,
};
use crate::transport::{HttpTransport, HttpTransportRequest, ReqwestTransport};
use crate::traits::ApiHandler;
use crate::types::{ApiStream, ApiStreamEvent, ChatMessage, Model};
use crate::usage::usage_event;

/// Provider id used in errors and logs.
pub const PROVIDER_ID: &str = "cerebras";

/// `Cerebras` chat-completion client.
///
/// Cheap to clone; clones share configuration and transport.
#[derive(Clone)]
pub struct CerebrasClient {
    config: Arc<CerebrasConfig>,
    transport: Arc<dyn HttpTransport>,
}

static_assertions::assert_impl_all!(CerebrasClient: Send, Sync, Clone);

impl CerebrasClient {
    /// Start building a client.
    pub fn builder() -> CerebrasBuilder {
        CerebrasBuilder::new()
    }

    /// Create a client from a validated configuration, using `reqwest`.
    pub fn new(config: CerebrasConfig) -> Result<Self, LlmError> {
        let http_client = config.http_config.build_client()?;
        Self::with_transport(config, Arc::new(ReqwestTransport::new(http_client)))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(
        config: CerebrasConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, LlmError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    pub fn config(&self) -> &CerebrasConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn model_id(&self) -> &str {
        self.config.model_id()
    }

    pub fn provider_id(&self) -> &'static str {
        PROVIDER_ID
    }
}

impl std::fmt::Debug for CerebrasClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CerebrasClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// One request/response round trip. Returns the outbound messages alongside
/// the assistant text so usage can be estimated from both.
async fn send_chat(
    config: &CerebrasConfig,
    transport: &dyn HttpTransport,
    outbound: Vec<ChatMessage>,
) -> Result<(Vec<ChatMessage>, String), LlmError> {
    let model = config.model_id();
    let request = CerebrasRequestTransformer.transform_chat(model, outbound);
    let body = serde_json::to_value(&request)?;
    let url = config.chat_completions_url();

    tracing::debug!(
        provider = PROVIDER_ID,
        %url,
        model,
        messages = request.messages.len(),
        "sending chat completion request"
    );

    let response = transport
        .execute_json(HttpTransportRequest {
            url,
            headers: build_headers(config)?,
            body,
        })
        .await
        .map_err(|e| match e {
            LlmError::HttpError(message) => LlmError::provider(PROVIDER_ID, message, None),
            other => other,
        })
        .inspect_err(|e| tracing::warn!(provider = PROVIDER_ID, error = %e, "request failed"))?;

    if !response.is_success() {
        let err = classify_http_error(PROVIDER_ID, response.status, &response.text());
        tracing::warn!(
            provider = PROVIDER_ID,
            status = response.status,
            error = %err,
            "provider returned an error response"
        );
        return Err(err);
    }

    let content = CerebrasResponseTransformer.transform_chat_response(&response.body)?;
    Ok((request.messages, content))
}

impl ApiHandler for CerebrasClient {
    fn get_model(&self) -> Result<Model, LlmError> {
        let info = self.config.model_info.as_ref().ok_or_else(|| {
            LlmError::ConfigurationError("Model information not provided".to_string())
        })?;
        Ok(Model {
            id: self.config.model_id().to_string(),
            info: info.clone(),
        })
    }

    fn create_message(&self, system_prompt: &str, messages: &[ChatMessage]) -> ApiStream {
        let config = Arc::clone(&self.config);
        let transport = Arc::clone(&self.transport);
        let outbound = build_outbound_messages(system_prompt, messages);

        Box::pin(async_stream::stream! {
            let (outbound, content) = match send_chat(&config, transport.as_ref(), outbound).await {
                Ok(result) => result,
                Err(e) => {
                    yield Err(e);
                    return;
                }
            };

            let usage = usage_event(config.model_info.as_ref(), &outbound, &content);
            if let ApiStreamEvent::Usage { input_tokens, output_tokens, total_cost } = &usage {
                tracing::debug!(
                    provider = PROVIDER_ID,
                    input_tokens,
                    output_tokens,
                    total_cost,
                    "estimated usage"
                );
            }

            yield Ok(ApiStreamEvent::Text { text: content });
            yield Ok(usage);
        })
    }
}
