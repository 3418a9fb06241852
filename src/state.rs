use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::translate::{TranslationAdapter, TranslatorFactory};
use crate::transliterate::{LanguageRegistry, TransliterationAdapter, TransliteratorFactory};

/// Process-wide state shared by every request.
///
/// Both adapters hold their collaborator handles behind `Arc` and are never
/// mutated after startup, so cloning per request is cheap and lock-free.
#[derive(Clone)]
pub struct AppState {
    pub transliterator: TransliterationAdapter,
    pub translator: TranslationAdapter,
}

impl AppState {
    /// Build both collaborators from configuration.
    ///
    /// A failed phonetic model load is logged and leaves the transliteration
    /// path uninitialized; only an invalid translation provider aborts startup.
    pub async fn new(config: &Config) -> Result<Self> {
        let registry = LanguageRegistry::builtin();

        info!("Initializing Transliteration Engine... (This may take a moment)");
        let loaded = TransliteratorFactory::create(&config.transliterate_config, &registry).await;
        let engine = match loaded {
            Ok(engine) => {
                info!("Transliteration Engine Ready.");
                Some(engine)
            }
            Err(e) => {
                error!("Failed to initialize Transliteration Engine: {:#}", e);
                None
            }
        };

        let generator = TranslatorFactory::create(&config.translate_config)?;

        Ok(Self::from_parts(
            TransliterationAdapter::new(engine, registry),
            TranslationAdapter::new(generator),
        ))
    }

    pub fn from_parts(
        transliterator: TransliterationAdapter,
        translator: TranslationAdapter,
    ) -> Self {
        Self {
            transliterator,
            translator,
        }
    }
}
