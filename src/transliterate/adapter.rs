use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::interface::{PhoneticEngine, TransliterationResult};
use super::registry::LanguageRegistry;
use crate::policy::FailurePolicy;

#[derive(Debug, Error)]
pub enum TransliterateError {
    #[error("Transliteration engine not initialized")]
    NotInitialized,
    #[error("Transliteration engine failed: {0:#}")]
    Engine(anyhow::Error),
    #[error("Transliteration engine returned no candidate for '{lang_code}'")]
    NoCandidate { lang_code: String },
}

/// Wraps the phonetic engine and applies the transliteration failure policy.
///
/// `engine` is `None` when the model failed to load at startup.
#[derive(Clone)]
pub struct TransliterationAdapter {
    engine: Option<Arc<dyn PhoneticEngine>>,
    registry: LanguageRegistry,
    policy: FailurePolicy,
}

impl TransliterationAdapter {
    pub fn new(engine: Option<Arc<dyn PhoneticEngine>>, registry: LanguageRegistry) -> Self {
        Self {
            engine,
            registry,
            policy: FailurePolicy::FailOpen,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the phonetic engine finished its startup load.
    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Render `text` in the script of `target_lang_code`.
    ///
    /// Unsupported codes and empty input are echoed without touching the
    /// engine. Engine failures are resolved through the adapter's policy;
    /// under the default fail-open policy this never returns `Err`.
    pub async fn transliterate(
        &self,
        text: &str,
        target_lang_code: &str,
    ) -> Result<TransliterationResult, TransliterateError> {
        if !self.registry.is_supported(target_lang_code) {
            debug!(
                "Language '{}' not supported for transliteration, returning input",
                target_lang_code
            );
            return Ok(passthrough(text));
        }

        if text.is_empty() {
            return Ok(passthrough(text));
        }

        let outcome = self.call_engine(text, target_lang_code).await;
        let outcome = outcome.map(|result| TransliterationResult { result });
        self.policy.resolve("Transliteration", outcome, || passthrough(text))
    }

    async fn call_engine(&self, text: &str, lang_code: &str) -> Result<String, TransliterateError> {
        let engine = match &self.engine {
            Some(engine) => engine,
            None => {
                warn!("Transliteration requested but engine is not initialized");
                return Err(TransliterateError::NotInitialized);
            }
        };

        let output = engine
            .transliterate(text, lang_code)
            .await
            .map_err(TransliterateError::Engine)?;

        output
            .best_candidate(lang_code)
            .filter(|candidate| !candidate.is_empty())
            .ok_or_else(|| TransliterateError::NoCandidate {
                lang_code: lang_code.to_string(),
            })
    }
}

fn passthrough(text: &str) -> TransliterationResult {
    TransliterationResult {
        result: text.to_string(),
    }
}
