//! LLM client abstraction layer.
//!
//! This module provides:
//! - [`LlmClient`] trait for swappable LLM providers
//! - [`OpenAiClient`], the chat-completions implementation
//!
//! # Adding a New Provider
//!
//! 1. Create a new file (e.g., `gemini.rs`)
//! 2. Implement `LlmClient` trait
//! 3. Add config fields in `config.rs`

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::tools::ToolSpec;
use crate::Result;

pub mod openai;

pub use openai::OpenAiClient;

use super::message::{Message, ToolCallRequest};

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Text content of the response.
    pub content: Option<String>,

    /// Tool calls requested by the LLM.
    pub tool_calls: Vec<ToolCallRequest>,

    /// Reason the response finished.
    pub finish_reason: String,

    /// Token usage statistics.
    pub usage: Usage,
}

impl LlmResponse {
    /// Create a simple text response.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: vec![],
            finish_reason: "stop".to_string(),
            usage: Usage::default(),
        }
    }

    /// Create a response carrying a single tool call.
    pub fn tool_call(id: &str, name: &str, arguments: serde_json::Value) -> Self {
        Self {
            content: None,
            tool_calls: vec![ToolCallRequest {
                id: id.to_string(),
                name: name.to_string(),
                arguments,
            }],
            finish_reason: "tool_calls".to_string(),
            usage: Usage::default(),
        }
    }

    /// Check if response has tool calls.
    #[inline]
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

/// LLM client trait — swappable provider abstraction.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send messages and get response.
    async fn chat(&self, messages: &[Message], tools: &[ToolSpec]) -> Result<LlmResponse>;

    /// Get the default model for this provider.
    fn default_model(&self) -> &str;
}

/// Fake LLM client for testing.
///
/// Replays scripted replies in order. A client built with
/// [`always_tool_call`](Self::always_tool_call) keeps returning that tool
/// call once the script runs out.
#[cfg(test)]
pub struct FakeLlmClient {
    replies: std::sync::Mutex<std::collections::VecDeque<Result<LlmResponse>>>,
    last: Option<LlmResponse>,
    seen: std::sync::Mutex<Vec<Vec<Message>>>,
}

#[cfg(test)]
impl FakeLlmClient {
    /// Create with predefined text responses.
    pub fn new(responses: Vec<&str>) -> Self {
        Self::scripted(responses.into_iter().map(|s| Ok(LlmResponse::text(s))).collect())
    }

    /// Create with an arbitrary script of replies and failures.
    pub fn scripted(replies: Vec<Result<LlmResponse>>) -> Self {
        Self {
            replies: std::sync::Mutex::new(replies.into()),
            last: None,
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Create with a single tool call followed by a text response.
    pub fn with_tool_call(name: &str, args: serde_json::Value, final_response: &str) -> Self {
        Self::scripted(vec![
            Ok(LlmResponse::tool_call("tc_1", name, args)),
            Ok(LlmResponse::text(final_response)),
        ])
    }

    /// A model that asks for the same tool call on every request.
    pub fn always_tool_call(name: &str, args: serde_json::Value) -> Self {
        Self {
            last: Some(LlmResponse::tool_call("tc_loop", name, args)),
            ..Self::scripted(vec![])
        }
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// Messages sent with the most recent request.
    pub fn last_request(&self) -> Vec<Message> {
        self.seen.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
#[async_trait]
impl LlmClient for FakeLlmClient {
    async fn chat(&self, messages: &[Message], _tools: &[ToolSpec]) -> Result<LlmResponse> {
        self.seen.lock().unwrap().push(messages.to_vec());

        let next = self.replies.lock().unwrap().pop_front();
        match (next, &self.last) {
            (Some(reply), _) => reply,
            (None, Some(last)) => Ok(last.clone()),
            (None, None) => Err(crate::error::Error::Llm("No more fake responses".to_string())),
        }
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_fake_llm_client() {
        let client = FakeLlmClient::new(vec!["Hello!", "World!"]);

        let resp1 = client.chat(&[], &[]).await.unwrap();
        assert_eq!(resp1.content.as_deref(), Some("Hello!"));

        let resp2 = client.chat(&[], &[]).await.unwrap();
        assert_eq!(resp2.content.as_deref(), Some("World!"));

        assert!(matches!(client.chat(&[], &[]).await, Err(Error::Llm(_))));
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test]
    async fn test_fake_repeats_tool_call() {
        let client = FakeLlmClient::always_tool_call("add", serde_json::json!({"a": 1, "b": 1}));
        for _ in 0..3 {
            assert!(client.chat(&[], &[]).await.unwrap().has_tool_calls());
        }
    }
}
