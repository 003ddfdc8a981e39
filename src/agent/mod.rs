//! Agent module — core agent logic.
//!
//! This module contains:
//! - Message types (Message, Role, ToolCallRequest)
//! - LLM client trait and the OpenAI implementation
//! - Prompt builder
//! - Agent loop for processing a user turn

mod loop_impl;
mod message;
mod prompt;

// LLM providers in submodule
pub mod llm;

// Re-exports for convenience
pub use llm::{LlmClient, LlmResponse, OpenAiClient, Usage};
pub use loop_impl::{AgentLoop, LoopRun, Phase, TurnOutcome};
pub use message::{Message, Role, ToolCallRequest};
pub use prompt::{Prompt, PromptBuilder, Segment};
