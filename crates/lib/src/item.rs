//! # Crawled Items
//!
//! An [`Item`] is the structured record of one crawled page as it travels through
//! the host's chain of pipeline stages. It is an untyped JSON object: the crawler
//! guarantees a few well-known fields, and plugins add their own.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The page URL.
pub const URL_FIELD: &str = "url";
/// Arbitrary page metadata collected by the crawler (title, headers, ...).
pub const METADATA_FIELD: &str = "metadata";
/// The page content rendered as markdown.
pub const MARKDOWN_FIELD: &str = "markdown";
/// Structured data extracted from the page by an LLM plugin.
pub const EXTRACTION_FIELD: &str = "extraction";

/// One crawled page, mutated in place by pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Creates an empty item.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts a field, returning the previous value if one was present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The page URL, if present and a string.
    pub fn url(&self) -> Option<&str> {
        self.0.get(URL_FIELD).and_then(Value::as_str)
    }

    /// The raw metadata value, whatever its shape.
    pub fn metadata(&self) -> Option<&Value> {
        self.0.get(METADATA_FIELD)
    }

    /// The markdown content. Only a string value counts as content.
    pub fn markdown(&self) -> Option<&str> {
        self.0.get(MARKDOWN_FIELD).and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Item {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Item {
    type Error = serde_json::Error;

    /// Fails unless `value` is a JSON object.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_readers() {
        let item = Item::try_from(json!({
            "url": "http://x.test",
            "metadata": {"lang": "en"},
            "markdown": "# Hello"
        }))
        .unwrap();

        assert_eq!(item.url(), Some("http://x.test"));
        assert_eq!(item.metadata(), Some(&json!({"lang": "en"})));
        assert_eq!(item.markdown(), Some("# Hello"));
    }

    #[test]
    fn test_non_string_markdown_is_not_content() {
        let item = Item::try_from(json!({ "markdown": 42 })).unwrap();
        assert_eq!(item.markdown(), None);
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        assert!(Item::try_from(json!(["not", "an", "object"])).is_err());
    }
}
