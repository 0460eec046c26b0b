//! Inference provider abstraction for chatrelay.

pub mod workers_ai;

pub use workers_ai::WorkersAi;

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use chatrelay_core::{ChatMessage, RelayError};
use futures::Stream;

/// Raw bytes from the upstream service, forwarded as they arrive.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, RelayError>> + Send>>;

/// Per-call generation options.
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub max_tokens: u32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self { max_tokens: 1024 }
    }
}

/// A service that turns a message sequence into a streamed completion.
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Sends the message sequence upstream and resolves once the service
    /// begins producing its stream, not when the stream completes.
    async fn chat_stream(
        &self,
        messages: &[ChatMessage],
        opts: &ChatOptions,
    ) -> Result<ByteStream, RelayError>;
}
