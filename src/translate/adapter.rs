use std::sync::Arc;

use thiserror::Error;
use tracing::error;

use super::interface::{TextGenerator, TranslationResult};

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("{0:#}")]
    Backend(anyhow::Error),
    #[error("translation backend returned an empty completion")]
    EmptyCompletion,
}

/// Build the single instruction prompt sent to the backend.
pub fn build_translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    format!(
        "You are a professional translator. Translate this text: '{}' from {} to {}. Output ONLY the translated text.",
        text, source_lang, target_lang
    )
}

/// Wraps the generative-text backend. Always fail-closed: every backend
/// error reaches the caller and there is no passthrough of the input.
#[derive(Clone)]
pub struct TranslationAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl TranslationAdapter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationResult, TranslateError> {
        let prompt = build_translation_prompt(text, source_lang, target_lang);

        let translated_text = self
            .generate_translation(&prompt)
            .await
            .map_err(|e| {
                error!("Translation Error: {}", e);
                e
            })?;

        Ok(TranslationResult {
            original_text: text.to_string(),
            translated_text,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        })
    }

    async fn generate_translation(&self, prompt: &str) -> Result<String, TranslateError> {
        let completion = self
            .generator
            .generate(prompt)
            .await
            .map_err(TranslateError::Backend)?;

        let translated = completion.trim();
        if translated.is_empty() {
            return Err(TranslateError::EmptyCompletion);
        }
        Ok(translated.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingGenerator {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingGenerator {
        fn replying(reply: Result<&str, &str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string).map_err(str::to_string),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(anyhow::Error::msg)
        }
    }

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let prompt = build_translation_prompt("hello", "en", "hi");
        assert_eq!(
            prompt,
            "You are a professional translator. Translate this text: 'hello' from en to hi. Output ONLY the translated text."
        );
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_translation_prompt("good morning", "English", "Tamil"),
            build_translation_prompt("good morning", "English", "Tamil")
        );
    }

    #[tokio::test]
    async fn test_translate_trims_and_echoes_languages() {
        let generator = RecordingGenerator::replying(Ok("  नमस्ते\n"));
        let adapter = TranslationAdapter::new(generator.clone());

        let result = adapter.translate("hello", "en", "hi").await.unwrap();
        assert_eq!(result.original_text, "hello");
        assert_eq!(result.translated_text, "नमस्ते");
        assert_eq!(result.source_lang, "en");
        assert_eq!(result.target_lang, "hi");

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("'hello' from en to hi"));
    }

    #[tokio::test]
    async fn test_backend_error_is_surfaced_with_cause() {
        let generator = RecordingGenerator::replying(Err("quota exceeded"));
        let adapter = TranslationAdapter::new(generator);

        let err = adapter.translate("hello", "en", "hi").await.unwrap_err();
        assert!(matches!(err, TranslateError::Backend(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_blank_completion_is_an_error() {
        let generator = RecordingGenerator::replying(Ok("   \n"));
        let adapter = TranslationAdapter::new(generator);

        let err = adapter.translate("hello", "en", "hi").await.unwrap_err();
        assert!(matches!(err, TranslateError::EmptyCompletion));
    }

    #[tokio::test]
    async fn test_free_form_language_names_pass_through() {
        let generator = RecordingGenerator::replying(Ok("Bonjour"));
        let adapter = TranslationAdapter::new(generator);

        let result = adapter.translate("Hello", "English", "French (Canada)").await.unwrap();
        assert_eq!(result.source_lang, "English");
        assert_eq!(result.target_lang, "French (Canada)");
    }

    #[tokio::test]
    async fn test_backend_error_never_echoes_input() {
        let generator = RecordingGenerator::replying(Err("model overloaded"));
        let adapter = TranslationAdapter::new(generator.clone());

        let result = adapter.translate("hello", "en", "hi").await;
        assert!(result.is_err());
        assert_eq!(generator.prompts.lock().unwrap().len(), 1);
    }
}
