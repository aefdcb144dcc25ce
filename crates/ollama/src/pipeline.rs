//! # Extraction Pipeline Stage
//!
//! For each crawled item, optionally performs one chat-completion call against
//! the inference server and stores the parsed JSON answer under `extraction`.

use crate::{
    errors::OllamaError,
    plugin::PLUGIN_KEY,
    prompts::{context_prompt, task_prompt},
    providers::{ChatMessage, ChatProvider, ChatRequest, LocalChatProvider, ResponseFormat},
    settings::Settings,
    validator::OllamaInputValidator,
};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use watercrawl_plugin::{
    item::EXTRACTION_FIELD, InputValidator, Item, Pipeline, PipelineError, RunContext,
};

/// The item-processing stage of the Ollama plugin.
///
/// The inference client is created on first use and reused for every item this
/// stage processes.
#[derive(Debug)]
pub struct OllamaExtractPipeline {
    settings: Settings,
    client: OnceCell<Box<dyn ChatProvider>>,
}

impl OllamaExtractPipeline {
    /// Creates a stage that connects to `settings.ollama_base_url` lazily.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
        }
    }

    /// Creates a stage that uses `provider` instead of building its own client.
    pub fn with_provider(settings: Settings, provider: Box<dyn ChatProvider>) -> Self {
        Self {
            settings,
            client: OnceCell::new_with(Some(provider)),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    async fn client(&self) -> Result<&dyn ChatProvider, OllamaError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                info!(
                    "Creating inference client for {}",
                    self.settings.ollama_base_url
                );
                let provider = LocalChatProvider::new(&self.settings.ollama_base_url)?;
                Ok::<Box<dyn ChatProvider>, OllamaError>(Box::new(provider))
            })
            .await?;
        Ok(client.as_ref())
    }

    /// Assembles the four message parts: system instruction, URL and metadata
    /// context, page content, task instruction.
    fn build_request(
        &self,
        validator: &OllamaInputValidator,
        item: &Item,
        markdown: &str,
    ) -> ChatRequest {
        ChatRequest {
            model: validator.model().to_string(),
            response_format: ResponseFormat::json_object(),
            messages: vec![
                ChatMessage::system(self.settings.system_prompt()),
                ChatMessage::user(context_prompt(item)),
                ChatMessage::user_text_part(markdown),
                ChatMessage::user(task_prompt(
                    validator.extraction_schema(),
                    validator.prompt_override(),
                )),
            ],
        }
    }

    async fn extract(
        &self,
        validator: &OllamaInputValidator,
        item: &Item,
        markdown: &str,
    ) -> Result<Value, OllamaError> {
        let request = self.build_request(validator, item, markdown);
        let response = self.client().await?.chat_completion(&request).await?;
        let content = response
            .first_content()
            .ok_or(OllamaError::EmptyResponse)?;
        Ok(serde_json::from_str(content)?)
    }
}

#[async_trait]
impl Pipeline for OllamaExtractPipeline {
    fn name(&self) -> &str {
        "OllamaExtractPipeline"
    }

    async fn process_item(&self, item: &mut Item, ctx: &RunContext) -> Result<(), PipelineError> {
        let Some(validator) = ctx.validator::<OllamaInputValidator>(PLUGIN_KEY) else {
            return Ok(());
        };
        if validator.is_empty() || !validator.is_active() {
            return Ok(());
        }

        let Some(markdown) = item.markdown().filter(|markdown| !markdown.is_empty()) else {
            warn!(
                url = item.url().unwrap_or_default(),
                "Item must contain a 'markdown' key with content."
            );
            return Ok(());
        };

        let extraction = self.extract(&validator, item, markdown).await?;
        debug!(
            url = item.url().unwrap_or_default(),
            model = validator.model(),
            "Stored extraction on item"
        );
        item.insert(EXTRACTION_FIELD, extraction);
        Ok(())
    }
}
