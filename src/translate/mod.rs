pub mod adapter;
pub mod factory;
pub mod gemini;
pub mod interface;
pub mod openai_compatible;

pub use adapter::{build_translation_prompt, TranslateError, TranslationAdapter};
pub use factory::TranslatorFactory;
pub use gemini::GeminiClient;
pub use interface::{TextGenerator, TranslationRequest, TranslationResult};
pub use openai_compatible::OpenAICompatibleClient;
