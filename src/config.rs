use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translate_config: TranslateConfig,
    #[serde(default)]
    pub transliterate_config: TransliterateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the generative-text backend used by `/translate/text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,
    /// Defaults depend on `llm_provider`; see `TranslatorFactory`.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Falls back to the `API_KEY` environment variable when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default = "default_translate_timeout")]
    pub request_timeout_secs: u64,
}

/// Settings for the phonetic model sidecar used by `/transliterate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterateConfig {
    #[serde(default = "default_xlit_service_url")]
    pub service_url: String,
    #[serde(default = "default_beam_width")]
    pub beam_width: u32,
    #[serde(default = "default_xlit_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_translate_timeout() -> u64 {
    60
}

fn default_xlit_service_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_beam_width() -> u32 {
    10
}

fn default_xlit_timeout() -> u64 {
    30
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            model: None,
            base_url: None,
            api_key: None,
            temperature: None,
            request_timeout_secs: default_translate_timeout(),
        }
    }
}

impl Default for TransliterateConfig {
    fn default() -> Self {
        Self {
            service_url: default_xlit_service_url(),
            beam_width: default_beam_width(),
            request_timeout_secs: default_xlit_timeout(),
        }
    }
}

impl Config {
    /// Load a YAML config file, substituting `${VAR}` placeholders from the
    /// process environment.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::parse(&content, |name| std::env::var(name).ok())
    }

    /// Parse YAML content, resolving placeholders through `lookup`.
    pub fn parse<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = substitute_env_vars(content, &lookup)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Config =
            serde_yaml::from_str(&content).context("Invalid configuration format")?;

        // An unresolved `${API_KEY}` means no credential was supplied.
        let unresolved = config
            .translate_config
            .api_key
            .as_deref()
            .is_some_and(|key| key.is_empty() || key.starts_with("${"));
        if unresolved {
            config.translate_config.api_key = None;
        }
        Ok(config)
    }

    /// Apply the environment overrides read at startup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.system_config.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.system_config.port = port;
        }
        if let Some(url) = lookup("XLIT_SERVICE_URL") {
            self.transliterate_config.service_url = url;
        }
        if let Some(key) = lookup("API_KEY").filter(|k| !k.is_empty()) {
            if self.translate_config.api_key.is_none() {
                self.translate_config.api_key = Some(key);
            }
        }
    }
}

/// Replace `${VAR_NAME}` occurrences; unknown variables are left as-is.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}
