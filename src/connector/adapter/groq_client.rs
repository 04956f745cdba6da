use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::{ChatError, Message};

const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1500;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-compatible chat-completions request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

/// Minimal subset of the completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for OpenAI-compatible chat-completions endpoints (Groq by
/// default).
///
/// Implements [`CompletionClient`] so the respond use case stays decoupled
/// from transport and serialization details.
///
/// **API key**: read from `GROQ_API_KEY` by [`from_env`](GroqClient::from_env).
/// A missing key is a precondition failure checked before any request goes
/// out, reported as [`ChatError::MissingCredential`] — never as a remote
/// error.
///
/// **Base URL**: defaults to `https://api.groq.com`. Override with
/// `GROQ_BASE_URL` to target any OpenAI-API-compatible server.
///
/// Requests are one-shot with a 30-second timeout: no retries, no backoff.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    /// Create a client with an explicit API key, model, and base URL.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Convenience constructor that reads configuration from the environment:
    /// - `GROQ_API_KEY`  — the credential; may be absent, in which case every
    ///   call fails with [`ChatError::MissingCredential`]
    /// - `GROQ_BASE_URL` — optional; defaults to `https://api.groq.com`
    /// - `GROQ_MODEL`    — optional; defaults to `llama-3.3-70b-versatile`
    pub fn from_env() -> Self {
        let key = std::env::var("GROQ_API_KEY").unwrap_or_default();
        let base =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(key, model, base)
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError> {
        if !self.has_credential() {
            return Err(ChatError::MissingCredential);
        }

        let request = ApiRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!(
            "POST {} (model={}, messages={})",
            self.url,
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::transport(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}: {body}");
            return Err(ChatError::remote(status.as_u16(), body));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::transport(format!("failed to parse response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatError::transport("response contained no choices"))
    }
}
