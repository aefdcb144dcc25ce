//! # Configuration Validator
//!
//! Typed, defaulted accessors over the per-run configuration payload of the
//! Ollama plugin, plus the JSON schema the host uses to render and validate that
//! payload.

use serde_json::{json, Value};
use watercrawl_plugin::{ConfigPayload, InputValidator};

/// The model used when the run does not pick one.
pub const DEFAULT_LLM_MODEL: &str = "hermes3";

/// Models offered in the configuration UI, as `(value, label)` pairs.
pub const SUPPORTED_MODELS: &[(&str, &str)] = &[
    ("hermes3", "Hermes3"),
    ("llama3.2-vision", "Llama 3.2 Vision"),
];

const LLM_MODEL_KEY: &str = "llm_model";
const PROMPT_KEY: &str = "prompt";
const EXTRACTOR_SCHEMA_KEY: &str = "extractor_schema";
const IS_ACTIVE_KEY: &str = "is_active";

/// Typed view over the `ollama_extract` configuration of one run.
#[derive(Debug, Clone, Default)]
pub struct OllamaInputValidator {
    data: ConfigPayload,
}

impl OllamaInputValidator {
    /// The model identifier, or [`DEFAULT_LLM_MODEL`].
    pub fn model(&self) -> &str {
        self.data
            .get(LLM_MODEL_KEY)
            .and_then(Value::as_str)
            .filter(|model| !model.trim().is_empty())
            .unwrap_or(DEFAULT_LLM_MODEL)
    }

    /// User-supplied extra instructions, or an empty string.
    pub fn prompt_override(&self) -> &str {
        self.data
            .get(PROMPT_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The JSON schema the model should follow.
    ///
    /// `None` when the key is absent or holds a falsy value: `null`, `false`,
    /// zero, an empty string, an empty array or an empty object.
    pub fn extraction_schema(&self) -> Option<&Value> {
        match self.data.get(EXTRACTOR_SCHEMA_KEY)? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            schema => Some(schema),
        }
    }

    pub fn is_active(&self) -> bool {
        self.data
            .get(IS_ACTIVE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// The example schema shown in the editor when nothing has been configured.
fn default_extractor_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "The main title of the webpage."
            }
        },
        "required": ["title"]
    })
}

impl InputValidator for OllamaInputValidator {
    fn from_payload(payload: ConfigPayload) -> Self {
        Self { data: payload }
    }

    fn json_schema() -> Value {
        let model_values: Vec<&str> = SUPPORTED_MODELS.iter().map(|(value, _)| *value).collect();
        let model_options: Vec<Value> = SUPPORTED_MODELS
            .iter()
            .map(|(value, label)| json!({ "label": label, "value": value }))
            .collect();

        json!({
            "title": "Ollama LLM",
            "description": "Extracts information from crawled content using Ollama's local LLM.",
            "type": "object",
            "properties": {
                LLM_MODEL_KEY: {
                    "title": "LLM Model",
                    "type": "string",
                    "default": DEFAULT_LLM_MODEL,
                    "enum": model_values,
                    "ui": {
                        "widget": "select",
                        "placeholder": "Select a model",
                        "options": model_options
                    }
                },
                PROMPT_KEY: {
                    "title": "Prompt",
                    "type": "string",
                    "ui": {
                        "widget": "textarea",
                        "placeholder": crate::prompts::GENERIC_EXTRACTION_PROMPT
                    }
                },
                EXTRACTOR_SCHEMA_KEY: {
                    "title": "Extractor Schema",
                    "type": "object",
                    "default": default_extractor_schema(),
                    "ui": {
                        "title": "JSON Schema",
                        "widget": "json-editor",
                        "editorHeight": "300px",
                        "fontSize": 14,
                        "editorOptions": {
                            "minimap": { "enabled": false },
                            "lineNumbers": "on",
                            "scrollBeyondLastLine": false,
                            "automaticLayout": true,
                            "folding": true,
                            "formatOnPaste": true,
                            "formatOnType": true
                        }
                    }
                },
                IS_ACTIVE_KEY: {
                    "title": "Active",
                    "type": "boolean",
                    "default": false
                }
            },
            "dependentRequired": {
                IS_ACTIVE_KEY: [LLM_MODEL_KEY]
            }
        })
    }

    fn data(&self) -> &ConfigPayload {
        &self.data
    }
}
