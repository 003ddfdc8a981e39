//! Toolchat - bilingual terminal chat with a tool-calling LLM agent
//!
//! This library provides the agent loop, the tool registry with the
//! built-in `add` and `greet` tools, and per-session chat state.

pub mod adapters;
pub mod agent;
pub mod config;
pub mod error;
pub mod i18n;
pub mod session;
pub mod tools;
pub mod ui;

pub use error::{Error, Result};
