use crate::domain::PromptLanguage;

/// Best-effort natural-language identification for system-prompt selection.
///
/// Infallible by contract: when the classifier cannot make a call (empty
/// input, digits, mixed signal) implementors return the default language
/// instead of an error, so detection can never fail a conversation turn.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> PromptLanguage;
}
