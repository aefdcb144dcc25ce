//! # Local Inference Client Tests
//!
//! These tests run the OpenAI-compatible client and the full extraction stage
//! against a mock HTTP server standing in for Ollama.

use anyhow::Result;
use serde_json::{json, Value};
use std::sync::Once;
use watercrawl_ollama::providers::{
    ChatMessage, ChatProvider, ChatRequest, LocalChatProvider, ResponseFormat,
};
use watercrawl_ollama::providers::local::UNREADABLE_BODY;
use watercrawl_ollama::{OllamaError, OllamaExtractPipeline, Settings, PLUGIN_KEY};
use watercrawl_plugin::{Item, Pipeline, PipelineError, RunContext};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initializes tracing and loads .env for tests.
fn setup_tracing() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "hermes3",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

fn simple_request() -> ChatRequest {
    ChatRequest {
        model: "hermes3".to_string(),
        response_format: ResponseFormat::json_object(),
        messages: vec![
            ChatMessage::system("Respond with JSON."),
            ChatMessage::user_text_part("# Hello"),
        ],
    }
}

#[tokio::test]
async fn test_chat_completion_wire_format() -> Result<()> {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer ollama"))
        .and(body_partial_json(json!({
            "model": "hermes3",
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": "Respond with JSON." },
                { "role": "user", "content": [{ "type": "text", "text": "# Hello" }] }
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body(r#"{"title":"Hello"}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = LocalChatProvider::new(&format!("{}/v1/", server.uri()))?;

    // --- 2. Act ---
    let response = provider.chat_completion(&simple_request()).await?;

    // --- 3. Assert ---
    assert_eq!(
        provider.endpoint(),
        format!("{}/v1/chat/completions", server.uri())
    );
    assert_eq!(response.first_content(), Some(r#"{"title":"Hello"}"#));
    Ok(())
}

#[tokio::test]
async fn test_chat_completion_error_status() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model 'hermes3' not found"))
        .mount(&server)
        .await;

    let provider = LocalChatProvider::new(&format!("{}/v1", server.uri()))?;
    let result = provider.chat_completion(&simple_request()).await;

    match result {
        Err(OllamaError::AiApi { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("Expected AiApi error, but got {other:?}"),
    }
    Ok(())
}

/// The server's error body is carried into the stage's runtime failure message.
#[tokio::test]
async fn test_error_body_reaches_runtime_message() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("server overloaded"))
        .mount(&server)
        .await;

    let provider = LocalChatProvider::new(&format!("{}/v1", server.uri()))?;
    let err = provider
        .chat_completion(&simple_request())
        .await
        .expect_err("503 should fail");
    let PipelineError::Runtime(message) = PipelineError::from(err);

    assert!(message.starts_with("Error processing item with Ollama: "));
    assert!(message.contains("503"));
    assert!(message.contains("server overloaded"));
    assert!(!message.contains(UNREADABLE_BODY));
    Ok(())
}

#[tokio::test]
async fn test_chat_completion_undecodable_body() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let provider = LocalChatProvider::new(&format!("{}/v1", server.uri()))?;
    let result = provider.chat_completion(&simple_request()).await;

    assert!(matches!(result, Err(OllamaError::AiDeserialization(_))));
    Ok(())
}

#[tokio::test]
async fn test_pipeline_builds_its_client_from_settings() -> Result<()> {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body(r#"{"title":"Hello"}"#)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let settings = Settings::with_base_url(format!("{}/v1", server.uri()));
    let pipeline = OllamaExtractPipeline::new(settings);
    let ctx = RunContext::new().with_plugin_config(
        PLUGIN_KEY,
        json!({ "llm_model": "hermes3", "is_active": true })
            .as_object()
            .cloned()
            .unwrap(),
    );

    // --- 2. Act ---
    let mut first = Item::try_from(json!({
        "url": "http://x.test",
        "metadata": {},
        "markdown": "# Hello"
    }))?;
    let mut second = first.clone();
    pipeline.process_item(&mut first, &ctx).await?;
    pipeline.process_item(&mut second, &ctx).await?;

    // --- 3. Assert ---
    assert_eq!(first.get("extraction"), Some(&json!({ "title": "Hello" })));
    assert_eq!(second.get("extraction"), Some(&json!({ "title": "Hello" })));

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
    let body: Value = serde_json::from_slice(&requests[0].body)?;
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["messages"][1]["content"], "URL: http://x.test\nMetadata: {}");
    assert_eq!(body["messages"][2]["content"][0]["text"], "# Hello");
    Ok(())
}

#[tokio::test]
async fn test_pipeline_surfaces_server_errors() -> Result<()> {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("out of memory"))
        .mount(&server)
        .await;

    let settings = Settings::with_base_url(format!("{}/v1", server.uri()));
    let pipeline = OllamaExtractPipeline::new(settings);
    let ctx = RunContext::new().with_plugin_config(
        PLUGIN_KEY,
        json!({ "is_active": true }).as_object().cloned().unwrap(),
    );
    let original = Item::try_from(json!({ "url": "http://x.test", "markdown": "# Hello" }))?;
    let mut item = original.clone();

    let result = pipeline.process_item(&mut item, &ctx).await;

    match result {
        Err(PipelineError::Runtime(message)) => {
            assert!(message.contains("500"), "got: {message}");
            assert!(message.contains("out of memory"), "got: {message}");
        }
        other => panic!("Expected a runtime error, got {other:?}"),
    }
    assert_eq!(item, original);
    Ok(())
}
