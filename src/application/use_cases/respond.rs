use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{CompletionClient, LanguageDetector};
use crate::domain::{ChatError, Message, PromptLanguage};

/// Default number of stored messages sent along with each request.
pub const DEFAULT_MAX_HISTORY: usize = 6;

/// Produce one assistant reply for a user message plus prior history.
///
/// Per turn: detect the language of the new message, pick the matching system
/// template, send `system + trailing history window + new message` to the
/// completion client, and hand the result back. The conversation itself is
/// never mutated here — the caller decides what to fold in, which keeps the
/// store unchanged when a call fails.
pub struct RespondUseCase {
    client: Arc<dyn CompletionClient>,
    detector: Arc<dyn LanguageDetector>,
    max_history: usize,
}

impl RespondUseCase {
    pub fn new(client: Arc<dyn CompletionClient>, detector: Arc<dyn LanguageDetector>) -> Self {
        Self {
            client,
            detector,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub async fn execute(
        &self,
        user_message: &str,
        history: &[Message],
    ) -> Result<String, ChatError> {
        if user_message.trim().is_empty() {
            return Err(ChatError::invalid_input("user message is empty"));
        }

        // Language is decided from the latest message alone, so the same
        // stored history can be framed by either template across turns.
        let language = self.detector.detect(user_message);
        info!(
            "Responding (language={}, history_len={}, window={})",
            language,
            history.len(),
            self.max_history
        );

        let messages = self.build_messages(language, user_message, history);
        debug!("Request carries {} messages", messages.len());

        self.client.complete(&messages).await
    }

    /// Assemble the request message list: system template first, then the last
    /// `max_history` entries of `history` oldest-first, then the new user
    /// message. Length is always `min(history.len(), max_history) + 2`.
    fn build_messages(
        &self,
        language: PromptLanguage,
        user_message: &str,
        history: &[Message],
    ) -> Vec<Message> {
        let start = history.len().saturating_sub(self.max_history);
        let window = &history[start..];

        let mut messages = Vec::with_capacity(window.len() + 2);
        messages.push(Message::system(language.system_prompt()));
        messages.extend_from_slice(window);
        messages.push(Message::user(user_message));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::Role;

    /// Test double that records how often it was called and answers with a
    /// canned result.
    struct StubClient {
        calls: AtomicUsize,
        reply: Result<String, ChatError>,
    }

    impl StubClient {
        fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(text.to_string()),
            }
        }

        fn failing(error: ChatError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Err(error),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn complete(&self, _messages: &[Message]) -> Result<String, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(ChatError::Remote { status, body }) => Err(ChatError::remote(*status, body)),
                Err(ChatError::Transport(msg)) => Err(ChatError::transport(msg)),
                Err(ChatError::InvalidInput(msg)) => Err(ChatError::invalid_input(msg)),
                Err(ChatError::MissingCredential) => Err(ChatError::MissingCredential),
            }
        }
    }

    struct FixedDetector(PromptLanguage);

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> PromptLanguage {
            self.0
        }
    }

    fn use_case(client: Arc<dyn CompletionClient>) -> RespondUseCase {
        RespondUseCase::new(client, Arc::new(FixedDetector(PromptLanguage::English)))
    }

    fn history_of(k: usize) -> Vec<Message> {
        (0..k).map(|i| Message::user(format!("turn {i}"))).collect()
    }

    #[test]
    fn test_build_messages_length_property() {
        let uc = use_case(Arc::new(StubClient::replying("ok")));
        for k in [0, 1, 5, 6, 7, 20] {
            let history = history_of(k);
            let built = uc.build_messages(PromptLanguage::English, "hello", &history);
            assert_eq!(built.len(), k.min(DEFAULT_MAX_HISTORY) + 2, "k={k}");
        }
    }

    #[test]
    fn test_build_messages_preserves_trailing_history_order() {
        let uc = use_case(Arc::new(StubClient::replying("ok")));
        let history = history_of(10);
        let built = uc.build_messages(PromptLanguage::English, "hello", &history);

        // system first, new user message last
        assert_eq!(built.first().unwrap().role(), Role::System);
        assert_eq!(built.last().unwrap().content(), "hello");

        // middle equals the last max_history entries, oldest first
        let window = &built[1..built.len() - 1];
        assert_eq!(window, &history[10 - DEFAULT_MAX_HISTORY..]);
    }

    #[test]
    fn test_build_messages_selects_template_by_language() {
        let uc = use_case(Arc::new(StubClient::replying("ok")));
        let en = uc.build_messages(PromptLanguage::English, "hi", &[]);
        let mr = uc.build_messages(PromptLanguage::Marathi, "हाय", &[]);
        assert_eq!(en[0].content(), PromptLanguage::English.system_prompt());
        assert_eq!(mr[0].content(), PromptLanguage::Marathi.system_prompt());
    }

    #[test]
    fn test_with_max_history_shrinks_window() {
        let uc = use_case(Arc::new(StubClient::replying("ok"))).with_max_history(2);
        let history = history_of(5);
        let built = uc.build_messages(PromptLanguage::English, "hello", &history);
        assert_eq!(built.len(), 4);
        assert_eq!(built[1].content(), "turn 3");
        assert_eq!(built[2].content(), "turn 4");
    }

    #[tokio::test]
    async fn test_execute_returns_assistant_text() {
        let uc = use_case(Arc::new(StubClient::replying("Namaste")));
        let reply = uc.execute("What is karma yoga?", &[]).await.unwrap();
        assert_eq!(reply, "Namaste");
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_input_without_calling_client() {
        let client = Arc::new(StubClient::replying("unused"));
        let uc = use_case(client.clone());

        let err = uc.execute("   ", &[]).await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidInput(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_execute_propagates_remote_error_unchanged() {
        let uc = use_case(Arc::new(StubClient::failing(ChatError::remote(
            500,
            "server error",
        ))));
        let err = uc.execute("hello", &[]).await.unwrap_err();
        match err {
            ChatError::Remote { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }
}
