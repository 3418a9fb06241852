//! HTTP gateway for Indic transliteration and LLM-backed translation.

pub mod config;
pub mod error;
pub mod policy;
pub mod routes;
pub mod state;
pub mod translate;
pub mod transliterate;

pub use config::Config;
pub use routes::create_app;
pub use state::AppState;
