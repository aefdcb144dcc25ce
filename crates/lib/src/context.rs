//! # Run Context
//!
//! The host hands a [`RunContext`] to every pipeline stage alongside each item.
//! It carries what belongs to the crawl run as a whole, most importantly the
//! configuration payload each plugin was given for this run.

use crate::validator::{ConfigPayload, InputValidator};
use std::collections::HashMap;
use tracing::debug;

/// Per-run state shared by all items of one crawl.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    plugin_validators: HashMap<String, ConfigPayload>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the configuration payload for the plugin identified by `plugin_key`.
    pub fn with_plugin_config(
        mut self,
        plugin_key: impl Into<String>,
        payload: ConfigPayload,
    ) -> Self {
        self.insert_plugin_config(plugin_key, payload);
        self
    }

    /// Sets or replaces the configuration payload for `plugin_key`.
    pub fn insert_plugin_config(&mut self, plugin_key: impl Into<String>, payload: ConfigPayload) {
        self.plugin_validators.insert(plugin_key.into(), payload);
    }

    pub fn plugin_config(&self, plugin_key: &str) -> Option<&ConfigPayload> {
        self.plugin_validators.get(plugin_key)
    }

    /// Resolves a typed validator for `plugin_key`.
    ///
    /// Returns `None` when this run carries no payload for the plugin.
    pub fn validator<V: InputValidator>(&self, plugin_key: &str) -> Option<V> {
        match self.plugin_validators.get(plugin_key) {
            Some(payload) => Some(V::from_payload(payload.clone())),
            None => {
                debug!("No configuration for plugin '{plugin_key}' in this run.");
                None
            }
        }
    }
}
