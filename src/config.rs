use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::{Result, TubeflowError};

/// Environment variable holding the hosted model credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "OPENAI_MODEL";
/// Environment variable overriding the API base url.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// hosted language model config
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// api credential, generation falls back to the static flow when absent
    pub api_key: Option<String>,
    /// model identifier, defaults to `gpt-4o-mini`
    pub model: String,
    /// chat completion api base url
    pub base_url: String,
    /// sampling temperature, defaults to 0.4
    pub temperature: f64,
    /// maximum output tokens, defaults to 800
    pub max_tokens: u32,
    /// request timeout in milliseconds, defaults to 30000
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.4,
            max_tokens: 800,
            timeout_ms: 30_000,
        }
    }
}

impl LlmConfig {
    /// Returns the credential when one is configured and non-empty.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref()).map_err(|e| TubeflowError::Config(format!("failed to load config file {:?}: {}", path.as_ref(), e)))?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        Ok(config)
    }

    /// Default config with the process environment applied on top.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Overlay `OPENAI_API_KEY`, `OPENAI_MODEL` and `OPENAI_BASE_URL` when set.
    pub fn with_env(self) -> Self {
        self.with_vars(|name| env::var(name).ok())
    }

    fn with_vars<F>(
        mut self,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.is_empty()) {
            self.llm.model = model;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.llm.base_url = base_url;
        }
        self
    }
}
