//! # Plugin Registration
//!
//! The static record the host reads at discovery time, and the glue that hands
//! out this plugin's validator and pipeline stage.

use crate::{pipeline::OllamaExtractPipeline, settings::Settings, validator::OllamaInputValidator};
use watercrawl_plugin::{
    item::EXTRACTION_FIELD, InputValidator, PluginDescriptor, RunContext, StageRegistration,
};

/// The key under which a run stores this plugin's configuration.
pub const PLUGIN_KEY: &str = "ollama_extract";

/// The registered path of the extraction stage.
pub const EXTRACT_PIPELINE_PATH: &str = "watercrawl_ollama::pipeline::OllamaExtractPipeline";

pub static DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    key: PLUGIN_KEY,
    name: "OllamaExtractPipeline",
    version: env!("CARGO_PKG_VERSION"),
    author: "AmirMohsen Asaran (https://github.com/amirasaran)",
    description: "Extracts information from crawled content using Ollama's local LLM.",
    url: "https://github.com/watercrawl/watercrawl-ollama",
    pipelines: &[StageRegistration {
        path: EXTRACT_PIPELINE_PATH,
        priority: 500,
    }],
    spider_middlewares: &[],
    downloader_middlewares: &[],
    extended_fields: &[EXTRACTION_FIELD],
    input_schema: OllamaInputValidator::json_schema,
};

/// Entry point for plugin discovery.
pub fn register() -> &'static PluginDescriptor {
    &DESCRIPTOR
}

/// Handle the host uses to obtain the plugin's validator and stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct OllamaPlugin;

impl OllamaPlugin {
    pub fn descriptor(&self) -> &'static PluginDescriptor {
        register()
    }

    /// The typed configuration of this plugin for the run, if the run has one.
    pub fn validator(&self, ctx: &RunContext) -> Option<OllamaInputValidator> {
        ctx.validator(PLUGIN_KEY)
    }

    /// Builds the extraction stage for the given process-wide settings.
    pub fn pipeline(&self, settings: Settings) -> OllamaExtractPipeline {
        OllamaExtractPipeline::new(settings)
    }
}
