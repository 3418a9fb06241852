use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use super::gemini::GeminiClient;
use super::interface::TextGenerator;
use super::openai_compatible::OpenAICompatibleClient;
use crate::config::TranslateConfig;

const GEMINI_MODEL: &str = "gemini-1.5-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const OPENAI_MODEL: &str = "gpt-4o-mini";
const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Factory for the generative-text backend behind translation
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a text generator based on the configured provider.
    ///
    /// A missing API key is not an error here: the client is still built and
    /// every call through it fails until the key is supplied.
    pub fn create(config: &TranslateConfig) -> Result<Arc<dyn TextGenerator>> {
        info!("Initializing translation backend: {}", config.llm_provider);

        if config.api_key.is_none() {
            warn!("API_KEY is not set. Translation calls will fail.");
        }

        let timeout = Duration::from_secs(config.request_timeout_secs);
        match config.llm_provider.as_str() {
            "gemini" | "gemini_llm" => {
                let (model, base_url) = resolve_endpoint(config, GEMINI_MODEL, GEMINI_BASE_URL);
                Ok(Arc::new(GeminiClient::new(
                    model,
                    base_url,
                    config.api_key.clone(),
                    config.temperature,
                    timeout,
                )?))
            }
            "openai_compatible" | "openai_compatible_llm" | "openai_llm" => {
                let (model, base_url) = resolve_endpoint(config, OPENAI_MODEL, OPENAI_BASE_URL);
                Ok(Arc::new(OpenAICompatibleClient::new(
                    model,
                    base_url,
                    config.api_key.clone(),
                    config.temperature,
                    timeout,
                )?))
            }
            other => Err(anyhow::anyhow!("Unsupported translation provider: {}", other)),
        }
    }
}

/// Configured model and base URL, falling back to the provider's defaults.
fn resolve_endpoint(config: &TranslateConfig, model: &str, base_url: &str) -> (String, String) {
    (
        config.model.clone().unwrap_or_else(|| model.to_string()),
        config.base_url.clone().unwrap_or_else(|| base_url.to_string()),
    )
}
