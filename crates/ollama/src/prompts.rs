//! # Extraction Prompts
//!
//! The fixed instruction texts sent to the model and the helpers that build the
//! item-specific message parts.

use serde_json::Value;
use watercrawl_plugin::Item;

/// The default system prompt for extraction requests.
///
/// Can be replaced process-wide through `EXTRACT_SYSTEM_PROMPT`.
pub const DEFAULT_EXTRACT_SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts information from crawled content. \
    You will extract information based on the user request. \
    You will only respond with the JSON output. Nothing else.";

/// The task instruction used when no extraction schema is configured.
pub const GENERIC_EXTRACTION_PROMPT: &str =
    "Transform the above content into structured JSON output.";

/// The task instruction used when an extraction schema is configured.
///
/// Placeholders: `{schema}`
pub const SCHEMA_EXTRACTION_PROMPT: &str = "Transform the above content into structured JSON output based on the following schema:\n```{schema}```";

/// Builds the context message: the page URL and its metadata as JSON.
pub fn context_prompt(item: &Item) -> String {
    let metadata = item.metadata().cloned().unwrap_or(Value::Null);
    format!(
        "URL: {url}\nMetadata: {metadata}",
        url = item.url().unwrap_or_default()
    )
}

/// Builds the final task instruction.
///
/// With a schema, the pretty-printed schema is embedded in the instruction;
/// without one the model is asked for generic structured JSON. A non-blank
/// `user_prompt` is appended as additional guidance.
pub fn task_prompt(schema: Option<&Value>, user_prompt: &str) -> String {
    let mut prompt = match schema {
        Some(schema) => {
            let rendered =
                serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
            SCHEMA_EXTRACTION_PROMPT.replace("{schema}", &rendered)
        }
        None => GENERIC_EXTRACTION_PROMPT.to_string(),
    };

    // User guidance follows the instruction and never replaces it.
    let user_prompt = user_prompt.trim();
    if !user_prompt.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(user_prompt);
    }
    prompt
}
