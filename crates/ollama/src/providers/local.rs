use crate::{
    errors::OllamaError,
    providers::{ChatProvider, ChatRequest, ChatResponse},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::debug;

/// Local inference servers ignore authentication, but OpenAI-compatible
/// endpoints still expect a bearer token.
/// Stands in for an error body that could not be read.
pub const UNREADABLE_BODY: &str = "<unreadable body>";

pub const PLACEHOLDER_API_KEY: &str = "ollama";

/// A client for a local, OpenAI-compatible inference server such as Ollama.
#[derive(Clone, Debug)]
pub struct LocalChatProvider {
    client: ReqwestClient,
    endpoint: String,
    api_key: String,
}

impl LocalChatProvider {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:11434/v1`).
    pub fn new(base_url: &str) -> Result<Self, OllamaError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(OllamaError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: PLACEHOLDER_API_KEY.to_string(),
        })
    }

    /// The full chat-completions URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatProvider for LocalChatProvider {
    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, OllamaError> {
        debug!(
            model = %request.model,
            endpoint = %self.endpoint,
            messages = request.messages.len(),
            "--> Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(OllamaError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, "Failed to read error response body");
                    UNREADABLE_BODY.to_string()
                }
            };
            return Err(OllamaError::AiApi { status, body });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(OllamaError::AiDeserialization)?;

        debug!(
            choices = chat_response.choices.len(),
            "<-- Received chat completion response"
        );
        Ok(chat_response)
    }
}
