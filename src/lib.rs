//! # siumai-provider-cerebras
//!
//! Cerebras chat-completion provider for siumai.
//!
//! The Cerebras endpoint doesn't stream, so each `create_message` call issues
//! one non-streaming request and replays the answer as the canonical event
//! pair every handler produces: a text event, then a usage event carrying an
//! estimated token count and cost.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use siumai_provider_cerebras::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LlmError> {
//!     let client = CerebrasClient::builder()
//!         .api_key("your-api-key")
//!         .model("llama-3.3-70b")
//!         .model_info(ModelInfo {
//!             input_price: Some(0.0001),
//!             output_price: Some(0.0002),
//!             ..Default::default()
//!         })
//!         .build()?;
//!
//!     let mut stream = client.create_message(
//!         "You are a helpful assistant.",
//!         &[ChatMessage::user("Hello!")],
//!     );
//!     while let Some(event) = stream.next().await {
//!         match event? {
//!             ApiStreamEvent::Text { text } => println!("{text}"),
//!             ApiStreamEvent::Usage { total_cost, .. } => println!("cost: {total_cost}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod cancel;
pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod models;
pub mod traits;
pub mod transformers;
pub mod transport;
pub mod types;
pub mod usage;

pub use builder::CerebrasBuilder;
pub use cancel::{ApiStreamHandle, CancelHandle};
pub use client::CerebrasClient;
pub use config::{CerebrasConfig, HttpConfig};
pub use error::LlmError;
pub use traits::ApiHandler;
pub use transport::{HttpTransport, HttpTransportRequest, HttpTransportResponse};
pub use types::{ApiStream, ApiStreamEvent, ChatMessage, MessageRole, Model, ModelInfo};

/// Commonly used items
pub mod prelude {
    pub use crate::{
        ApiHandler, ApiStream, ApiStreamEvent, CerebrasClient, ChatMessage, LlmError,
        MessageRole, Model, ModelInfo,
    };
}
