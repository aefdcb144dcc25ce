//! # Process-wide Settings
//!
//! Where the inference server lives and, optionally, a replacement for the
//! default system instruction. Settings are loaded once by the host and passed
//! into each [`OllamaExtractPipeline`](crate::OllamaExtractPipeline) explicitly.

use crate::prompts::DEFAULT_EXTRACT_SYSTEM_PROMPT;
use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// The OpenAI-compatible endpoint a stock Ollama install exposes.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the inference server. Loaded from `OLLAMA_BASE_URL`.
    #[serde(default = "default_ollama_base_url")]
    pub ollama_base_url: String,
    /// Replaces the default system instruction. Loaded from `EXTRACT_SYSTEM_PROMPT`.
    #[serde(default)]
    pub extract_system_prompt: Option<String>,
}

fn default_ollama_base_url() -> String {
    DEFAULT_OLLAMA_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ollama_base_url: default_ollama_base_url(),
            extract_system_prompt: None,
        }
    }
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// Layers, last one wins:
    /// 1. Built-in defaults.
    /// 2. Plain variables: `OLLAMA_BASE_URL`, `EXTRACT_SYSTEM_PROMPT`.
    /// 3. Prefixed variables: `WATERCRAWL_OLLAMA_OLLAMA_BASE_URL`, ...
    ///
    /// Reading a `.env` file is left to the caller.
    pub fn load() -> Result<Self, SettingsError> {
        let settings = ConfigBuilder::builder()
            .set_default("ollama_base_url", DEFAULT_OLLAMA_BASE_URL)?
            .add_source(Environment::default())
            .add_source(Environment::with_prefix("WATERCRAWL_OLLAMA").prefix_separator("_"))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        info!(
            "Loaded Ollama settings: base_url='{}', custom system prompt: {}",
            settings.ollama_base_url,
            settings.extract_system_prompt.is_some()
        );
        Ok(settings)
    }

    /// Creates settings pointing at `base_url` with the default system prompt.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            ollama_base_url: base_url.into(),
            extract_system_prompt: None,
        }
    }

    /// The system instruction sent with every extraction request.
    ///
    /// A blank override counts as unset.
    pub fn system_prompt(&self) -> &str {
        match self.extract_system_prompt.as_deref() {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => DEFAULT_EXTRACT_SYSTEM_PROMPT,
        }
    }
}
