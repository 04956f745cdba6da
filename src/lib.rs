pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{CompletionClient, LanguageDetector, RespondUseCase, DEFAULT_MAX_HISTORY};

pub use connector::{GroqClient, WhatlangDetector};

pub use domain::{ChatError, Conversation, Message, PromptLanguage, Role};
