//! Adapters module — chat surfaces.
//!
//! Each adapter implements the [`Channel`] trait and drives one
//! [`SessionState`](crate::session::SessionState).
//!
//! # Supported Channels
//!
//! - **CLI** — Interactive terminal chat

pub mod cli;

/// Channel trait for chat adapters.
pub trait Channel {
    /// Channel name (e.g., "cli").
    fn name(&self) -> &str;

    /// Run until the user leaves.
    fn start(&mut self) -> impl std::future::Future<Output = crate::Result<()>>;
}

/// Command typed into the chat box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A message for the agent
    Say(String),
    /// Flip the display language
    ToggleLanguage,
    ShowLogs,
    ShowHistory,
    Exit,
    Empty,
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Input::Empty,
            "exit" | "quit" | "/exit" => Input::Exit,
            "/lang" | "/language" => Input::ToggleLanguage,
            "/logs" | "/tools" => Input::ShowLogs,
            "/history" => Input::ShowHistory,
            _ => Input::Say(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("  "), Input::Empty);
        assert_eq!(Input::parse("QUIT"), Input::Exit);
        assert_eq!(Input::parse("q"), Input::Say("q".into()));
        assert_eq!(Input::parse("/lang"), Input::ToggleLanguage);
        assert_eq!(Input::parse("/logs"), Input::ShowLogs);
        assert_eq!(Input::parse(" What is 4 plus 5? "), Input::Say("What is 4 plus 5?".into()));
    }
}
