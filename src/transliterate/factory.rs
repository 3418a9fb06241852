use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use super::client::XlitServiceClient;
use super::interface::PhoneticEngine;
use super::registry::LanguageRegistry;
use crate::config::TransliterateConfig;

/// Factory for the phonetic engine handle
pub struct TransliteratorFactory;

impl TransliteratorFactory {
    /// Load the phonetic model for every registry language.
    ///
    /// # Arguments
    /// * `config` - Transliteration section of the configuration
    /// * `registry` - Languages to load the model for
    ///
    /// # Returns
    /// The shared engine handle, or the load error. Callers treat an error as
    /// "not initialized" rather than aborting startup.
    pub async fn create(
        config: &TransliterateConfig,
        registry: &LanguageRegistry,
    ) -> Result<Arc<dyn PhoneticEngine>> {
        info!(
            "Initializing transliteration engine at {} (beam_width={})",
            config.service_url, config.beam_width
        );
        info!("Loading phonetic model for: {}", registry.describe());

        let codes = registry.codes();
        let client = XlitServiceClient::load(
            &config.service_url,
            &codes,
            config.beam_width,
            Duration::from_secs(config.request_timeout_secs),
        )
        .await?;

        Ok(Arc::new(client))
    }
}
