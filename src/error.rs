//! Error types for Toolchat

use thiserror::Error;

/// Result type alias for Toolchat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Toolchat
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("Max iterations reached ({0} model calls without a final answer)")]
    MaxIterations(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidArguments`].
    pub fn invalid_args(tool: &str, reason: impl Into<String>) -> Self {
        Error::InvalidArguments {
            tool: tool.to_string(),
            reason: reason.into(),
        }
    }

    /// Errors raised while resolving or running a tool.
    ///
    /// These never end a turn; they are fed back to the model as tool results.
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Error::UnknownTool(_) | Error::InvalidArguments { .. })
    }

    /// Errors from talking to the model provider (network, auth, quota, bad payload).
    pub fn is_model_call(&self) -> bool {
        matches!(self, Error::Llm(_) | Error::Http(_) | Error::Json(_))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
