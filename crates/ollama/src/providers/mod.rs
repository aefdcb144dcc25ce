pub mod local;
pub mod types;

use crate::errors::OllamaError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

pub use local::LocalChatProvider;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, ContentPart, MessageContent, ResponseFormat,
};

/// A trait for the inference client behind the extraction stage.
///
/// Implementations send one OpenAI-compatible chat-completion request and return
/// the decoded response. The stage shares a single client across all items of a
/// run, so implementations must tolerate concurrent calls.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug + DynClone {
    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, OllamaError>;
}

dyn_clone::clone_trait_object!(ChatProvider);
