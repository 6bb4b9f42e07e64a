//! Core types shared with the host application
//!
//! Conversation messages, model metadata, and the canonical stream events
//! every provider adapter emits.

use crate::error::LlmError;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Model information
///
/// Supplied by the host. Only the per-token prices are read when estimating
/// cost; the remaining fields are carried through `get_model`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Maximum output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Context window size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
    #[serde(default)]
    pub supports_prompt_cache: bool,
    /// Input cost per token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_price: Option<f64>,
    /// Output cost per token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The model a handler is configured for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub info: ModelInfo,
}

/// Canonical stream event
///
/// Serialized with a `type` tag (`{"type":"text","text":"..."}`) so the host
/// can treat every provider's output the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiStreamEvent {
    /// Response text
    Text { text: String },
    /// Token usage and estimated cost for the call
    Usage {
        input_tokens: u64,
        output_tokens: u64,
        total_cost: f64,
    },
}

impl ApiStreamEvent {
    /// Text payload, if this is a text event.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Usage { .. } => None,
        }
    }
}

/// Lazy event stream returned by `ApiHandler::create_message`.
pub type ApiStream = Pin<Box<dyn Stream<Item = Result<ApiStreamEvent, LlmError>> + Send>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_serializes_with_lowercase_role() {
        let value = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let text = ApiStreamEvent::Text {
            text: "test response".into(),
        };
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"type": "text", "text": "test response"})
        );

        let usage = ApiStreamEvent::Usage {
            input_tokens: 8,
            output_tokens: 4,
            total_cost: 0.0016,
        };
        assert_eq!(
            serde_json::to_value(&usage).unwrap(),
            json!({"type": "usage", "input_tokens": 8, "output_tokens": 4, "total_cost": 0.0016})
        );
    }

    #[test]
    fn model_info_tolerates_missing_fields() {
        let info: ModelInfo = serde_json::from_value(json!({"input_price": 0.0001})).unwrap();
        assert_eq!(info.input_price, Some(0.0001));
        assert_eq!(info.output_price, None);
        assert!(!info.supports_prompt_cache);
    }
}
