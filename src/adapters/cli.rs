//! CLI adapter — interactive and single-message terminal chat.

use inquire::{InquireError, Text};

use crate::agent::{AgentLoop, LlmClient};
use crate::error::Error;
use crate::session::{SessionState, TurnReport};
use crate::tools::ToolRegistry;
use crate::ui;
use crate::Result;

use super::{Channel, Input};

/// CLI channel for interactive agent sessions.
pub struct CliChannel<C: LlmClient> {
    agent: AgentLoop<C>,
    tools: ToolRegistry,
    session: SessionState,
}

impl<C: LlmClient> CliChannel<C> {
    /// Create a new CLI channel.
    pub fn new(agent: AgentLoop<C>, tools: ToolRegistry, session: SessionState) -> Self {
        Self {
            agent,
            tools,
            session,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Run a single message and return the turn report.
    pub async fn run_once(&mut self, message: &str) -> TurnReport {
        let spinner = ui::thinking_spinner();
        let report = self.session.turn(&self.agent, &self.tools, message).await;
        spinner.finish_and_clear();
        report
    }

    /// Apply one line of input. Returns `false` once the user asks to leave.
    pub async fn handle(&mut self, input: Input) -> bool {
        let lang = self.session.language();
        match input {
            Input::Empty => {}
            Input::Exit => {
                println!("👋 {}", lang.strings().goodbye);
                return false;
            }
            Input::ToggleLanguage => {
                let lang = self.session.toggle_language();
                ui::print_language(lang);
            }
            Input::ShowLogs => ui::print_tool_log(&self.session.logs().snapshot(), lang),
            Input::ShowHistory => ui::print_transcript(self.session.history().messages()),
            Input::Say(text) => {
                let report = self.run_once(&text).await;
                if report.failed {
                    ui::print_failure(&report.reply);
                } else if let Some(reply) = self.session.history().messages().last() {
                    ui::print_message(reply);
                }
                ui::print_tool_log(&report.tool_log, self.session.language());
            }
        }
        true
    }

    fn read_line(&self) -> Result<Option<String>> {
        let placeholder = self.session.language().strings().input;
        match Text::new(">").with_placeholder(placeholder).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(Error::Other(format!("Prompt failed: {e}"))),
        }
    }
}

impl<C: LlmClient> Channel for CliChannel<C> {
    fn name(&self) -> &str {
        "cli"
    }

    /// Run interactive REPL loop.
    async fn start(&mut self) -> Result<()> {
        ui::print_header(self.agent.client().default_model(), self.session.language());

        loop {
            let input = match self.read_line()? {
                Some(line) => Input::parse(&line),
                None => Input::Exit,
            };
            if !self.handle(input).await {
                break;
            }
        }

        Ok(())
    }
}
