use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /transliterate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterationRequest {
    pub text: String,
    pub target_lang_code: String,
}

/// Envelope returned by `POST /transliterate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationResult {
    pub result: String,
}

/// Raw output of the phonetic engine.
///
/// Depending on how the model is configured it answers with a single string,
/// a ranked candidate list, or a map keyed by language code holding either
/// ranked candidates (words) or one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XlitOutput {
    Single(String),
    Ranked(Vec<String>),
    ByLanguage(HashMap<String, Vec<String>>),
    SentenceByLanguage(HashMap<String, String>),
}

impl XlitOutput {
    /// The top-ranked candidate for `lang_code`, if the output holds one.
    pub fn best_candidate(self, lang_code: &str) -> Option<String> {
        match self {
            XlitOutput::Single(text) => Some(text),
            XlitOutput::Ranked(candidates) => candidates.into_iter().next(),
            XlitOutput::ByLanguage(mut by_lang) => by_lang
                .remove(lang_code)
                .and_then(|candidates| candidates.into_iter().next()),
            XlitOutput::SentenceByLanguage(mut by_lang) => by_lang.remove(lang_code),
        }
    }
}

/// Phonetic transliteration engine - actual model runs out of process
#[async_trait]
pub trait PhoneticEngine: Send + Sync {
    /// Transliterate Roman-script `text` into the script of `lang_code`.
    async fn transliterate(&self, text: &str, lang_code: &str) -> Result<XlitOutput, anyhow::Error>;
}
