use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /translate/text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Interface for a hosted generative-text model
/// The model keeps no state between calls; every prompt is self-contained
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Return the model's completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, anyhow::Error>;
}
