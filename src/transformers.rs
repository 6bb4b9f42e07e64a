//! Request/response transformers for the Cerebras chat-completion endpoint.
//!
//! The endpoint speaks the OpenAI chat-completions dialect, but only the
//! non-streaming subset is used.

use crate::error::LlmError;
use crate::types::ChatMessage;
use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.0;

/// Wire body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    /// Always `false`: the endpoint doesn't stream.
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Prepend the system prompt to the caller's history.
///
/// The caller's slice is cloned, never modified; order is preserved.
pub fn build_outbound_messages(system_prompt: &str, messages: &[ChatMessage]) -> Vec<ChatMessage> {
    std::iter::once(ChatMessage::system(system_prompt))
        .chain(messages.iter().cloned())
        .collect()
}

/// Builds request bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CerebrasRequestTransformer;

impl CerebrasRequestTransformer {
    pub fn transform_chat(&self, model: &str, messages: Vec<ChatMessage>) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: model.to_string(),
            messages,
            temperature: TEMPERATURE,
            stream: false,
        }
    }
}

/// Extracts the assistant text from a successful response body.
#[derive(Debug, Clone, Copy, Default)]
pub struct CerebrasResponseTransformer;

impl CerebrasResponseTransformer {
    /// `choices[0].message.content`; every other field is ignored.
    pub fn transform_chat_response(&self, body: &[u8]) -> Result<String, LlmError> {
        let response: ChatCompletionResponse = serde_json::from_slice(body).map_err(|e| {
            LlmError::ParseError(format!("Invalid chat completion response: {e}"))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::ParseError("No choices in response".to_string()))?;

        choice
            .message
            .content
            .ok_or_else(|| LlmError::ParseError("Response message has no text content".to_string()))
    }
}
