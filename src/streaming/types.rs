//! Core streaming types

use futures::Stream;
use std::pin::Pin;

use crate::error::DriverError;
use crate::utils::cancel::CancelHandle;

/// One increment produced while consuming a streamed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// User-visible answer text
    Text(String),
    /// Reasoning-trace text (`thought: true` parts)
    Thought(String),
}

impl StreamEvent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Thought(_) => None,
        }
    }

    pub fn as_thought(&self) -> Option<&str> {
        match self {
            Self::Thought(t) => Some(t),
            Self::Text(_) => None,
        }
    }
}

/// Pinned, boxed stream of [`StreamEvent`]s.
///
/// Pull-based: nothing is read from the connection until the consumer polls.
/// Dropping the stream closes the connection.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, DriverError>> + Send>>;

/// A [`ChatStream`] paired with a handle that stops it from another task.
///
/// The response status has already been checked when a handle exists, so
/// cancellation only concerns the body.
pub struct ChatStreamHandle {
    pub stream: ChatStream,
    pub cancel: CancelHandle,
}

impl std::fmt::Debug for ChatStreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatStreamHandle")
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}
