use async_trait::async_trait;
use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use watercrawl_ollama::providers::{ChatProvider, ChatRequest, ChatResponse};
use watercrawl_ollama::OllamaError;

// --- Mock Chat Provider ---

#[derive(Clone, Debug)]
enum MockReply {
    Content(String),
    Error(String),
}

/// A scriptable inference client that records every request it receives.
///
/// Replies are served in the order they were added. Clones share the same
/// script and call log, so a test can hand one clone to the stage and inspect
/// the other.
#[derive(Clone, Debug, Default)]
pub struct MockChatProvider {
    replies: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose first reply carries `content` as the message content.
    pub fn with_content(content: &str) -> Self {
        let provider = Self::new();
        provider.add_content(content);
        provider
    }

    /// A provider whose first call fails with `message`.
    pub fn failing(message: &str) -> Self {
        let provider = Self::new();
        provider.add_error(message);
        provider
    }

    pub fn add_content(&self, content: &str) {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Content(content.to_string()));
    }

    pub fn add_error(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Error(message.to_string()));
    }

    /// Retrieves the recorded requests for assertion.
    pub fn get_calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse, OllamaError> {
        self.calls.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(OllamaError::AiApi {
                status: 500,
                body: "MockChatProvider: no reply programmed".to_string(),
            });
        }
        match replies.remove(0) {
            MockReply::Content(content) => Ok(ChatResponse::from_content(content)),
            MockReply::Error(message) => Err(OllamaError::AiApi {
                status: 500,
                body: message,
            }),
        }
    }
}

// --- Log Capture ---

/// Collects formatted tracing output so tests can assert on emitted events.
///
/// Install it for the current thread with
/// `tracing::subscriber::set_default(capture.subscriber())`.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A plain-text subscriber writing every event at `DEBUG` and above into this capture.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

pub struct LogCaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogCaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}
