use thiserror::Error;

/// The error a pipeline stage surfaces to the host framework.
///
/// Each plugin maps its own failures (network, decoding, parsing) into this type,
/// so the host can apply one failure-isolation policy to every stage, typically
/// dropping or flagging the item that failed.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A stage failed while processing an item. The message embeds the
    /// description of the underlying error.
    #[error("{0}")]
    Runtime(String),
}

impl PipelineError {
    /// Builds a runtime failure from any displayable error, prefixed with `context`.
    pub fn runtime(context: &str, source: impl std::fmt::Display) -> Self {
        PipelineError::Runtime(format!("{context}: {source}"))
    }
}
