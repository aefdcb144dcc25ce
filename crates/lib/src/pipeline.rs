use crate::{context::RunContext, errors::PipelineError, item::Item};
use async_trait::async_trait;

/// A unit of per-item transformation logic registered with the host framework.
///
/// The host calls `process_item` once per crawled item, in the order given by
/// each stage's registered priority. Whether items are processed concurrently is
/// the host's decision, so implementations must be `Send + Sync`.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// A stable name for logs and diagnostics.
    fn name(&self) -> &str;

    /// Processes one item in place.
    ///
    /// A stage that has nothing to do leaves `item` untouched and returns `Ok`.
    /// On `Err` the item must not carry partial state from this stage.
    async fn process_item(&self, item: &mut Item, ctx: &RunContext) -> Result<(), PipelineError>;
}
