//! # watercrawl-ollama: LLM Extraction Plugin
//!
//! This crate provides an item-processing stage for the watercrawl pipeline. It
//! sends each crawled page's markdown to a locally hosted LLM server through an
//! OpenAI-compatible chat-completions API and stores the model's JSON answer on
//! the item under `extraction`.
//!
//! The host discovers the plugin through [`register`], resolves the per-run
//! configuration with [`OllamaInputValidator`] and drives
//! [`OllamaExtractPipeline`] once per item.

pub mod errors;
pub mod pipeline;
pub mod plugin;
pub mod prompts;
pub mod providers;
pub mod settings;
pub mod validator;

pub use errors::OllamaError;
pub use pipeline::OllamaExtractPipeline;
pub use plugin::{register, OllamaPlugin, DESCRIPTOR, PLUGIN_KEY};
pub use settings::{Settings, SettingsError};
pub use validator::OllamaInputValidator;
