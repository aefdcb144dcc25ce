//! Runs the extraction stage against a live Ollama server.
//!
//! ```sh
//! OLLAMA_BASE_URL=http://localhost:11434/v1 cargo run -p watercrawl-ollama --example extract
//! ```

use anyhow::Result;
use serde_json::json;
use watercrawl_ollama::{register, OllamaPlugin, Settings, PLUGIN_KEY};
use watercrawl_plugin::{Item, Pipeline, RunContext};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let descriptor = register();
    println!("{} v{} by {}", descriptor.name, descriptor.version, descriptor.author);

    let settings = Settings::load()?;
    let stage = OllamaPlugin.pipeline(settings);

    let config = json!({
        "llm_model": "hermes3",
        "is_active": true,
        "extractor_schema": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "summary": { "type": "string" }
            },
            "required": ["title"]
        }
    });
    let ctx = RunContext::new().with_plugin_config(
        PLUGIN_KEY,
        config.as_object().cloned().unwrap_or_default(),
    );

    let mut item = Item::try_from(json!({
        "url": "https://example.com",
        "metadata": { "lang": "en" },
        "markdown": "# Example Domain\n\nThis domain is for use in illustrative examples in documents."
    }))?;

    stage.process_item(&mut item, &ctx).await?;

    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}
