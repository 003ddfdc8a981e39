//! Session state — everything one chat session owns.
//!
//! A [`SessionState`] bundles the conversation history, the tool-call log
//! and the display language. Each session owns its own instance; nothing is
//! shared between sessions, so no locking is involved. There is no explicit
//! teardown: dropping the value ends the session.

mod history;

pub use history::ConversationHistory;

use tracing::{info, warn};

use crate::agent::{AgentLoop, LlmClient, Phase, PromptBuilder, TurnOutcome};
use crate::error::Error;
use crate::i18n::Language;
use crate::tools::{ToolLogger, ToolRegistry};

/// Result of one user turn
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// Assistant message appended to the history (answer or error text)
    pub reply: String,
    pub failed: bool,
    pub phases: Vec<Phase>,
    /// Tool log entries recorded during this turn
    pub tool_log: Vec<String>,
}

/// Mutable state of one interactive session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    history: ConversationHistory,
    logs: ToolLogger,
    language: Language,
}

impl SessionState {
    /// Fresh session: empty history and log, English.
    pub fn init() -> Self {
        Self::default()
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Flip between English and Russian. Stored messages are left as they are.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggle();
        info!("Language switched to {}", self.language);
        self.language
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn logs(&self) -> &ToolLogger {
        &self.logs
    }

    /// Process one user utterance.
    ///
    /// Always appends exactly two messages to the history: the user text and
    /// one assistant reply. A failed model call becomes the reply text and
    /// the session stays usable.
    pub async fn turn<C: LlmClient>(
        &mut self,
        agent: &AgentLoop<C>,
        tools: &ToolRegistry,
        text: &str,
    ) -> TurnReport {
        let lang = self.language;
        let prompt = PromptBuilder::build(lang.strings().system, self.history.messages(), text);
        self.history.push_user(text);

        let log_start = self.logs.len();
        let run = agent.run(prompt, tools, &mut self.logs, lang).await;

        let (reply, failed) = match run.outcome {
            TurnOutcome::Done(answer) => (answer, false),
            TurnOutcome::Failed(e) => {
                if e.is_model_call() {
                    warn!("Model call failed, turn ends with an error reply: {}", e);
                } else {
                    warn!("Turn failed: {}", e);
                }
                (format_turn_error(&e), true)
            }
        };
        self.history.push_assistant(reply.clone());

        TurnReport {
            reply,
            failed,
            phases: run.phases,
            tool_log: self.logs.since(log_start).to_vec(),
        }
    }
}

/// Text shown in place of an answer when a turn fails
pub fn format_turn_error(error: &Error) -> String {
    format!("⚠️ Error: {error}")
}
