//! Tool logger - append-only record of tool invocations for display

use super::ToolArgs;

/// In-memory log of tool calls, one entry per invocation.
///
/// Entries are never deduplicated or evicted; the log lives as long as the
/// session that owns it.
#[derive(Debug, Clone, Default)]
pub struct ToolLogger {
    entries: Vec<String>,
}

impl ToolLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&mut self, description: impl Into<String>) {
        self.entries.push(description.into());
    }

    /// Current entries, oldest first. Does not clear the log.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries recorded since the log had `from` entries
    pub fn since(&self, from: usize) -> &[String] {
        &self.entries[from.min(self.entries.len())..]
    }

    /// Describe a call as `"<tool> tool called with k=v, ..."`, in declared parameter order.
    pub fn describe(tool: &str, args: &ToolArgs) -> String {
        format!("{tool} tool called with {args}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{AddTool, GreetTool, Tool};
    use serde_json::json;

    #[test]
    fn test_record_and_snapshot() {
        let mut log = ToolLogger::new();
        log.record("first");
        log.record("first");
        log.record("second");

        assert_eq!(log.snapshot(), vec!["first", "first", "second"]);
        // snapshot does not drain
        assert_eq!(log.len(), 3);
        assert_eq!(log.since(2), ["second".to_string()]);
        assert!(log.since(10).is_empty());
    }

    #[test]
    fn test_describe_uses_validated_args() {
        let args = AddTool.to_spec().validate(&json!({"b": 5.0, "a": 4.0, "note": "x"})).unwrap();
        assert_eq!(ToolLogger::describe("add", &args), "add tool called with a=4, b=5");

        let args = GreetTool
            .to_spec()
            .validate(&json!({"zzz_first": 1, "name": "Alice", "b": 4.0}))
            .unwrap();
        assert_eq!(ToolLogger::describe("greet", &args), "greet tool called with name=Alice");
    }
}
