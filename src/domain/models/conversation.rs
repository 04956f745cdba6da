use serde::{Deserialize, Serialize};

use super::Message;

/// An append-only, session-scoped message log.
///
/// Storage is unbounded; callers that talk to the completion endpoint read a
/// trailing [`window`](Conversation::window) instead of the full history so the
/// context sent per request stays bounded. The system prompt is never stored
/// here — it is injected fresh on every request from the detected language of
/// the latest user message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Empty the log. Idempotent.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The last `n` messages in original (oldest-first) order.
    ///
    /// Returns all messages when fewer than `n` exist; `n = 0` is empty.
    pub fn window(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
