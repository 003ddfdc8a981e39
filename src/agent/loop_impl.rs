//! Agent loop - routes one user turn through the model and tools.
//!
//! The loop is a small state machine:
//!
//! ```text
//! AwaitingModel --final answer--> Done
//! AwaitingModel --tool calls----> ExecutingTool --results--> AwaitingModel
//! AwaitingModel --model error---> Failed
//! AwaitingModel --call budget spent--> Failed
//! ```
//!
//! Tool failures (unknown tool, bad arguments) are fed back to the model as
//! tool results and never end the turn.

use tracing::{debug, info, warn};

use crate::error::Error;
use crate::i18n::Language;
use crate::tools::{ToolLogger, ToolRegistry};

use super::llm::LlmClient;
use super::message::{Message, ToolCallRequest};
use super::prompt::Prompt;

/// Observable phase of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingModel,
    ExecutingTool,
    Done,
    Failed,
}

enum State {
    AwaitingModel,
    ExecutingTool(Vec<ToolCallRequest>),
    Done(String),
    Failed(Error),
}

impl State {
    fn phase(&self) -> Phase {
        match self {
            State::AwaitingModel => Phase::AwaitingModel,
            State::ExecutingTool(_) => Phase::ExecutingTool,
            State::Done(_) => Phase::Done,
            State::Failed(_) => Phase::Failed,
        }
    }
}

/// Terminal result of a turn
#[derive(Debug)]
pub enum TurnOutcome {
    Done(String),
    Failed(Error),
}

/// What happened during one run of the loop
#[derive(Debug)]
pub struct LoopRun {
    pub outcome: TurnOutcome,
    /// Every phase entered, in order, starting with `AwaitingModel`
    pub phases: Vec<Phase>,
    pub model_calls: usize,
}

/// The agent loop processes a turn through LLM and tool execution
pub struct AgentLoop<C: LlmClient> {
    client: C,
    max_iterations: usize,
}

impl<C: LlmClient> AgentLoop<C> {
    /// Create a new agent loop allowing at most `max_iterations` model calls per turn
    pub fn new(client: C, max_iterations: usize) -> Self {
        Self {
            client,
            max_iterations: max_iterations.max(1),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run the loop until a final answer or a failure.
    ///
    /// Successful tool calls are recorded in `logger` in invocation order.
    pub async fn run(
        &self,
        mut prompt: Prompt,
        tools: &ToolRegistry,
        logger: &mut ToolLogger,
        lang: Language,
    ) -> LoopRun {
        let specs = tools.list();
        let mut model_calls = 0;
        let mut state = State::AwaitingModel;
        let mut phases = vec![state.phase()];

        info!("Starting agent loop ({} tools, lang={})", specs.len(), lang);

        loop {
            state = match state {
                State::AwaitingModel if model_calls >= self.max_iterations => {
                    warn!("Agent loop hit {} model calls without an answer", model_calls);
                    State::Failed(Error::MaxIterations(model_calls))
                }
                State::AwaitingModel => {
                    model_calls += 1;
                    debug!("Model call {}/{}", model_calls, self.max_iterations);

                    let reply = self.client.chat(&prompt.render(), &specs).await;
                    if let Ok(response) = &reply {
                        debug!(
                            "Model finished with '{}' ({} tokens, {} tool calls)",
                            response.finish_reason,
                            response.usage.total_tokens,
                            response.tool_calls.len()
                        );
                    }

                    match reply {
                        Err(e) => {
                            warn!("Model call failed: {}", e);
                            State::Failed(e)
                        }
                        Ok(response) if !response.has_tool_calls() => {
                            State::Done(response.content.unwrap_or_default())
                        }
                        Ok(response) => {
                            prompt.push_scratchpad(Message::assistant_with_tools(
                                response.content.unwrap_or_default(),
                                response.tool_calls.clone(),
                            ));
                            State::ExecutingTool(response.tool_calls)
                        }
                    }
                }
                State::ExecutingTool(calls) => {
                    for call in &calls {
                        let result = self.execute_tool(tools, logger, call, lang);
                        prompt.push_scratchpad(Message::tool_result(&call.id, result));
                    }
                    State::AwaitingModel
                }
                State::Done(answer) => {
                    info!("Agent completed with response: {} chars", answer.len());
                    return LoopRun {
                        outcome: TurnOutcome::Done(answer),
                        phases,
                        model_calls,
                    };
                }
                State::Failed(e) => {
                    return LoopRun {
                        outcome: TurnOutcome::Failed(e),
                        phases,
                        model_calls,
                    };
                }
            };
            phases.push(state.phase());
        }
    }

    fn execute_tool(
        &self,
        tools: &ToolRegistry,
        logger: &mut ToolLogger,
        call: &ToolCallRequest,
        lang: Language,
    ) -> String {
        debug!("Executing tool: {} with args: {}", call.name, call.arguments);

        match tools.call(&call.name, &call.arguments, lang) {
            Ok(invocation) => {
                logger.record(ToolLogger::describe(&call.name, &invocation.args));
                debug!("Tool {} succeeded: {} chars", call.name, invocation.output.len());
                invocation.output
            }
            Err(e) => {
                let error_msg = format!("Error: {e}");
                debug!("Tool {} failed: {}", call.name, error_msg);
                error_msg
            }
        }
    }
}
