use thiserror::Error;

/// Everything that can go wrong during a single conversation turn.
///
/// Every variant is terminal for that turn — there is no retry or backoff.
/// The caller keeps the user's message in the conversation and surfaces the
/// error inline, so the user can resubmit.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The API credential is absent. Detected before any network attempt, so
    /// a missing key never shows up as a remote failure.
    #[error("API credential not found: set GROQ_API_KEY in your environment or .env file")]
    MissingCredential,

    /// The endpoint answered with a non-success status. Carries the raw body
    /// so the user sees what the provider actually said.
    #[error("API error {status}: {body}")]
    Remote { status: u16, body: String },

    /// Timeout, connection failure, or a response body that does not match the
    /// completions schema.
    #[error("Transport fault: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ChatError {
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
