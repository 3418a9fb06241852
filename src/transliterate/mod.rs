pub mod adapter;
pub mod client;
pub mod factory;
pub mod interface;
pub mod registry;

pub use adapter::{TransliterateError, TransliterationAdapter};
pub use client::XlitServiceClient;
pub use factory::TransliteratorFactory;
pub use interface::{PhoneticEngine, TransliterationRequest, TransliterationResult, XlitOutput};
pub use registry::{LanguageRegistry, SupportedLanguage};
