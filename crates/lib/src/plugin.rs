//! # Plugin Descriptors
//!
//! Static metadata a plugin exposes to the host at discovery time. A descriptor
//! is a `'static` constant: no instance state, no side effects, no errors.

use serde_json::Value;

/// A stage the host should register, with its ordering position among all
/// registered stages. Lower priorities run earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRegistration {
    pub path: &'static str,
    pub priority: u16,
}

/// Everything the host needs to know about a plugin before a run starts.
#[derive(Debug, Clone, Copy)]
pub struct PluginDescriptor {
    /// Stable identifier used to look up this plugin's configuration in a run.
    pub key: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    /// Item-processing stages.
    pub pipelines: &'static [StageRegistration],
    /// Spider-level middlewares.
    pub spider_middlewares: &'static [StageRegistration],
    /// Network-level (request/response) middlewares.
    pub downloader_middlewares: &'static [StageRegistration],
    /// Item fields this plugin introduces.
    pub extended_fields: &'static [&'static str],
    /// The JSON schema of the plugin's per-run configuration.
    pub input_schema: fn() -> Value,
}

impl PluginDescriptor {
    /// The registered priority of the pipeline stage at `path`, if any.
    pub fn pipeline_priority(&self, path: &str) -> Option<u16> {
        self.pipelines
            .iter()
            .find(|stage| stage.path == path)
            .map(|stage| stage.priority)
    }

    pub fn extends_field(&self, field: &str) -> bool {
        self.extended_fields.contains(&field)
    }
}
