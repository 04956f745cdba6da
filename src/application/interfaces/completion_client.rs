use async_trait::async_trait;

use crate::domain::{ChatError, Message};

/// An interface for sending a fully assembled message list to a chat-completion
/// endpoint and receiving the assistant's reply.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::RespondUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `messages` (system prompt first, user message last) and return the
    /// first completion's text.
    ///
    /// One shot: no retries, no backoff. Every failure is surfaced to the
    /// caller for display.
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError>;
}
