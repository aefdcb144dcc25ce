use thiserror::Error;
use watercrawl_plugin::PipelineError;

/// Failures that can occur while extracting data from one item.
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the inference server: {0}")]
    AiRequest(reqwest::Error),
    #[error("Inference server returned status {status}: {body}")]
    AiApi { status: u16, body: String },
    #[error("Failed to deserialize chat completion response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Chat completion response contained no message content")]
    EmptyResponse,
    #[error("Model output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Every extraction failure reaches the host as one generic runtime error.
impl From<OllamaError> for PipelineError {
    fn from(err: OllamaError) -> Self {
        PipelineError::runtime("Error processing item with Ollama", err)
    }
}
