//! Cancellation utilities
//!
//! Best-effort cancellation for `create_message`: cancelling drops the pending
//! HTTP future, which closes the connection.

use crate::error::LlmError;
use crate::types::ApiStream;
use tokio_util::sync::CancellationToken;

/// A handle that can be used to request cancellation.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. The wrapped stream stops at its next poll.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A future that resolves when cancellation is requested.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Event stream paired with its cancel handle.
pub struct ApiStreamHandle {
    pub stream: ApiStream,
    pub cancel: CancelHandle,
}

impl std::fmt::Debug for ApiStreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiStreamHandle")
            .field("cancel", &self.cancel)
            .finish_non_exhaustive()
    }
}

/// Wrap a stream so that cancelling the handle ends it.
///
/// If cancellation wins before the first event, the stream yields a single
/// `StreamError` so callers can tell it apart from a completed call. Once
/// events have been delivered it simply ends.
pub fn make_cancellable_stream(stream: ApiStream) -> ApiStreamHandle {
    let cancel = CancelHandle::new();
    let token = cancel.token.clone();

    let s = async_stream::stream! {
        use futures::StreamExt;

        let mut inner = stream;
        let mut delivered = false;
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    if !delivered {
                        yield Err(LlmError::StreamError("Request cancelled".to_string()));
                    }
                    break;
                }
                item = inner.next() => {
                    let Some(item) = item else { break };
                    delivered = true;
                    yield item;
                }
            }
        }
    };

    ApiStreamHandle {
        stream: Box::pin(s),
        cancel,
    }
}
