//! Provider handler capability
//!
//! The contract every provider adapter in the host implements, so the host
//! can hold any of them behind `Arc<dyn ApiHandler>`.

use crate::cancel::{ApiStreamHandle, make_cancellable_stream};
use crate::error::LlmError;
use crate::types::{ApiStream, ChatMessage, Model};

pub trait ApiHandler: Send + Sync {
    /// The configured model and its metadata.
    fn get_model(&self) -> Result<Model, LlmError>;

    /// Send `system_prompt` followed by `messages` and stream the result.
    ///
    /// The returned stream is lazy: nothing is sent until it is first polled.
    fn create_message(&self, system_prompt: &str, messages: &[ChatMessage]) -> ApiStream;

    /// Like `create_message`, with a handle that aborts the pending request.
    fn create_message_with_cancel(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> ApiStreamHandle {
        make_cancellable_stream(self.create_message(system_prompt, messages))
    }
}
