//! Tool registry - holds and invokes tools

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::i18n::Language;
use crate::Result;
use super::{AddTool, GreetTool, Tool, ToolArgs, ToolSpec};

/// A completed tool call: the arguments the tool ran with and its reply
#[derive(Debug, Clone)]
pub struct Invocation {
    pub args: ToolArgs,
    pub output: String,
}

/// Tool registry keeps registered tools and invokes them by name
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with the built-in `add` and `greet` tools
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(AddTool);
        registry.register(GreetTool);
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), Box::new(tool)).is_none() {
            self.order.push(name);
        }
    }

    /// Tool specs in registration order
    pub fn list(&self) -> Vec<ToolSpec> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|t| t.to_spec())
            .collect()
    }

    /// Validate `arguments` and run the named tool
    pub fn invoke(&self, name: &str, arguments: &Value, lang: Language) -> Result<String> {
        self.call(name, arguments, lang).map(|inv| inv.output)
    }

    /// Like [`invoke`](Self::invoke), but also hands back the validated arguments
    pub fn call(&self, name: &str, arguments: &Value, lang: Language) -> Result<Invocation> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;

        let args = tool.to_spec().validate(arguments)?;
        debug!("Invoking tool {} with {}", name, args);
        let output = tool.execute(&args, lang)?;
        Ok(Invocation { args, output })
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::DummyTool;
    use serde_json::json;

    #[test]
    fn test_registry_register_and_invoke() {
        let mut registry = ToolRegistry::new();
        registry.register(DummyTool {
            name: "test_tool".to_string(),
            result: "success".to_string(),
        });

        let result = registry.invoke("test_tool", &json!({}), Language::En).unwrap();
        assert_eq!(result, "success");
    }

    #[test]
    fn test_registry_unknown_tool() {
        let registry = ToolRegistry::with_builtins();
        let err = registry.invoke("multiply", &json!({}), Language::En).unwrap_err();
        assert!(matches!(err, Error::UnknownTool(ref n) if n == "multiply"));
    }

    #[test]
    fn test_registry_invalid_arguments() {
        let registry = ToolRegistry::with_builtins();
        let err = registry.invoke("greet", &json!({"name": 42}), Language::En).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { ref tool, .. } if tool == "greet"));
    }

    #[test]
    fn test_builtins_listed_in_order() {
        let registry = ToolRegistry::with_builtins();
        let names: Vec<String> = registry.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["add", "greet"]);
    }

    #[test]
    fn test_builtin_add_follows_language() {
        let registry = ToolRegistry::with_builtins();
        let args = json!({"a": 2, "b": 3});
        assert_eq!(
            registry.invoke("add", &args, Language::En).unwrap(),
            "The sum of 2 and 3 is 5"
        );
        assert_eq!(
            registry.invoke("add", &args, Language::Ru).unwrap(),
            "Сумма 2 и 3 равна 5"
        );
    }

    #[test]
    fn test_call_returns_validated_args() {
        let registry = ToolRegistry::with_builtins();
        let inv = registry
            .call("add", &json!({"b": 5.0, "a": 4.0, "note": "x"}), Language::En)
            .unwrap();
        assert_eq!(inv.args.to_string(), "a=4, b=5");
        assert_eq!(inv.output, "The sum of 4 and 5 is 9");
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ToolRegistry::new();
        registry.register(DummyTool { name: "t".into(), result: "one".into() });
        registry.register(DummyTool { name: "t".into(), result: "two".into() });
        assert_eq!(registry.list().len(), 1);
        assert_eq!(registry.invoke("t", &json!({}), Language::En).unwrap(), "two");
    }
}
