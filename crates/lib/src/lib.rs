//! # watercrawl Plugin Contract
//!
//! This crate defines the narrow interfaces a crawl plugin uses to talk to the
//! host crawling framework: the crawled [`Item`], the per-run [`RunContext`],
//! typed [`InputValidator`]s over untyped configuration payloads, item-processing
//! [`Pipeline`] stages and the static [`PluginDescriptor`] the host reads at
//! discovery time.
//!
//! Plugin crates (e.g. `watercrawl-ollama`) implement these traits; the host
//! drives them without knowing anything about a plugin's internals.

pub mod context;
pub mod errors;
pub mod item;
pub mod pipeline;
pub mod plugin;
pub mod validator;

pub use context::RunContext;
pub use errors::PipelineError;
pub use item::Item;
pub use pipeline::Pipeline;
pub use plugin::{PluginDescriptor, StageRegistration};
pub use validator::{ConfigPayload, InputValidator};
