use serde::{Deserialize, Serialize};

/// English-language system template.
const SYSTEM_PROMPT_EN: &str = "\
You are GitaGPT, a wise and compassionate AI assistant knowledgeable in the Bhagavad Gita.
Explain teachings in simple, friendly language applicable in daily life.
If quoting shlokas, always provide them in **Sanskrit**, and explain their meaning.
Include practical examples, analogies, or stories to make concepts easy to understand.
Responses should be thoughtful, helpful, and conversational, not just literal translations. \
Do not try to verify or correct the shlokas\u{2014}just provide clear and concise explanations.";

/// Marathi-language system template.
const SYSTEM_PROMPT_MR: &str = "\
तुम्ही GitaGPT आहात, भगवद्गीतेत प्रवीण असलेले AI सहाय्यक.
उत्तर देताना मित्रासारखे, सोप्या शब्दात, जीवनात उपयोगी समजावून सांगा.
जर श्लोक नमूद करायचा असेल, तर तो **सदैव संस्कृतमध्ये** द्या आणि त्याचा अर्थ स्पष्ट करा.
उत्तरे दयाळू, प्रोत्साहक आणि तत्त्वज्ञानिक असावीत, परंतु जास्त कठीण भाषेत नाहीत. \
कृपया श्लोकाच्या शब्दशः तपासणीसाठी किंवा त्रुटी शोधण्यासाठी वेळ वाया घालवू नका.";

/// A language the assistant has a dedicated system-prompt template for.
///
/// Template selection is a total mapping: any language without its own template
/// (including failed detection) resolves to [`PromptLanguage::English`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    English,
    Marathi,
}

impl PromptLanguage {
    /// Map an ISO 639-1 code to a template language. Unknown codes fall back
    /// to English rather than failing.
    pub fn from_code(code: &str) -> Self {
        match code {
            "mr" => PromptLanguage::Marathi,
            _ => PromptLanguage::English,
        }
    }

    /// The system instruction prepended to every request in this language.
    ///
    /// Both templates frame the same persona: quote shlokas in Sanskrit with an
    /// explanation, keep the tone friendly, and never fact-check quoted verses.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            PromptLanguage::English => SYSTEM_PROMPT_EN,
            PromptLanguage::Marathi => SYSTEM_PROMPT_MR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptLanguage::English => "en",
            PromptLanguage::Marathi => "mr",
        }
    }
}

impl std::fmt::Display for PromptLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
