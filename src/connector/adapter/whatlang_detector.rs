use tracing::debug;
use whatlang::Lang;

use crate::application::LanguageDetector;
use crate::domain::PromptLanguage;

/// A [`LanguageDetector`] backed by the trigram classifier in the `whatlang`
/// crate.
///
/// Only Marathi selects the Marathi template; every other outcome — another
/// language, an unreliable call, or no detection at all (empty input, bare
/// digits) — falls back to English. Detection never fails a turn.
#[derive(Debug, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> PromptLanguage {
        match whatlang::detect_lang(text) {
            Some(Lang::Mar) => PromptLanguage::Marathi,
            other => {
                debug!("Language detection: {:?} -> default template", other);
                PromptLanguage::English
            }
        }
    }
}
