//! Prompt assembly.
//!
//! A prompt is an ordered list of segments: the system instruction, the
//! prior conversation, the new user message, and a scratchpad slot. The
//! scratchpad starts empty and collects the assistant tool-call messages and
//! tool results produced while the agent loop runs.

use super::message::{Message, Role};

/// One slot in a [`Prompt`]
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Message(Message),
    /// Where intermediate tool reasoning is spliced in
    Scratchpad,
}

/// A structured prompt ready to be rendered for the model
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    segments: Vec<Segment>,
    scratchpad: Vec<Message>,
}

impl Prompt {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a tool-reasoning message (assistant tool calls or tool results)
    pub fn push_scratchpad(&mut self, message: Message) {
        self.scratchpad.push(message);
    }

    /// Flatten into the message list sent to the model.
    pub fn render(&self) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.segments.len() + self.scratchpad.len());
        for segment in &self.segments {
            match segment {
                Segment::Message(m) => messages.push(m.clone()),
                Segment::Scratchpad => messages.extend(self.scratchpad.iter().cloned()),
            }
        }
        messages
    }
}

/// Builds prompts from a system instruction, history and the new utterance
pub struct PromptBuilder;

impl PromptBuilder {
    /// Assemble `system`, then `history` in order, then `user_text`, then the scratchpad slot.
    ///
    /// System and tool messages in `history` are skipped; only user and
    /// assistant turns are carried into the prompt.
    pub fn build(system_text: &str, history: &[Message], user_text: &str) -> Prompt {
        let mut segments = Vec::with_capacity(history.len() + 3);
        segments.push(Segment::Message(Message::system(system_text)));
        segments.extend(
            history
                .iter()
                .filter(|m| matches!(m.role, Role::User | Role::Assistant))
                .map(|m| Segment::Message(turn_only(m))),
        );
        segments.push(Segment::Message(Message::user(user_text)));
        segments.push(Segment::Scratchpad);

        Prompt {
            segments,
            scratchpad: Vec::new(),
        }
    }
}

/// Copy of a history turn without any tool-call metadata
fn turn_only(m: &Message) -> Message {
    match m.role {
        Role::Assistant => Message::assistant(m.content.clone()),
        _ => Message::user(m.content.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_orders_segments() {
        let history = vec![Message::user("Hi"), Message::assistant("Hello!")];
        let prompt = PromptBuilder::build("Be helpful.", &history, "What is 4 plus 5?");

        let segments = prompt.segments();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0], Segment::Message(Message::system("Be helpful.")));
        assert_eq!(segments[1], Segment::Message(Message::user("Hi")));
        assert_eq!(segments[2], Segment::Message(Message::assistant("Hello!")));
        assert_eq!(segments[3], Segment::Message(Message::user("What is 4 plus 5?")));
        assert_eq!(segments[4], Segment::Scratchpad);
    }

    #[test]
    fn test_build_is_deterministic() {
        let history = vec![Message::user("a"), Message::assistant("b")];
        assert_eq!(
            PromptBuilder::build("sys", &history, "c"),
            PromptBuilder::build("sys", &history, "c")
        );
    }

    #[test]
    fn test_render_splices_scratchpad() {
        let mut prompt = PromptBuilder::build("sys", &[], "hi");
        assert_eq!(prompt.render().len(), 2);

        prompt.push_scratchpad(Message::tool_result("tc_0", "done"));
        let rendered = prompt.render();
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].role, Role::System);
        assert_eq!(rendered[1].role, Role::User);
        assert_eq!(rendered[2].role, Role::Tool);
    }

    #[test]
    fn test_history_system_messages_dropped() {
        let history = vec![Message::system("old"), Message::user("kept")];
        let prompt = PromptBuilder::build("sys", &history, "now");
        assert_eq!(prompt.render().len(), 3);
    }
}
