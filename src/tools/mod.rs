//! Tools module - agent capabilities
//!
//! Tools are small local actions the agent can request by name. Each tool
//! declares a typed parameter list; arguments coming from the model are
//! validated against it before the tool runs.

mod add;
mod greet;
mod logger;
mod registry;

pub use add::AddTool;
pub use greet::GreetTool;
pub use logger::ToolLogger;
pub use registry::{Invocation, ToolRegistry};

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::Error;
use crate::i18n::Language;
use crate::Result;

/// Type of a declared tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Number,
    Text,
}

impl ParamType {
    /// JSON Schema type name
    pub fn schema_type(self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::Text => "string",
        }
    }
}

/// A single declared parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub ty: ParamType,
}

impl ParamSpec {
    pub fn new(name: &str, ty: ParamType) -> Self {
        Self {
            name: name.to_string(),
            ty,
        }
    }
}

/// Tool specification as advertised to the LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
}

impl ToolSpec {
    /// JSON Schema object describing the parameters, in declared order.
    pub fn json_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in &self.params {
            properties.insert(param.name.clone(), json!({ "type": param.ty.schema_type() }));
        }
        let required: Vec<&str> = self.params.iter().map(|p| p.name.as_str()).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required
        })
    }

    /// Check raw arguments against the declared parameters.
    ///
    /// Keys that are not declared are ignored.
    pub fn validate(&self, arguments: &Value) -> Result<ToolArgs> {
        let object = arguments.as_object().ok_or_else(|| {
            Error::invalid_args(&self.name, format!("expected a JSON object, got {arguments}"))
        })?;

        let mut values = Vec::with_capacity(self.params.len());
        for param in &self.params {
            let raw = object.get(&param.name).ok_or_else(|| {
                Error::invalid_args(&self.name, format!("missing parameter '{}'", param.name))
            })?;

            let value = match (param.ty, raw) {
                (ParamType::Number, Value::Number(n)) => n.as_f64().map(ArgValue::Number),
                (ParamType::Text, Value::String(s)) => Some(ArgValue::Text(s.clone())),
                _ => None,
            }
            .ok_or_else(|| {
                Error::invalid_args(
                    &self.name,
                    format!(
                        "parameter '{}' must be a {}, got {raw}",
                        param.name,
                        param.ty.schema_type()
                    ),
                )
            })?;

            values.push((param.name.clone(), value));
        }

        Ok(ToolArgs { values })
    }
}

/// A validated argument value
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Number(n) => write!(f, "{n}"),
            ArgValue::Text(s) => f.write_str(s),
        }
    }
}

/// Arguments that passed validation, in declared order
#[derive(Debug, Clone, PartialEq)]
pub struct ToolArgs {
    values: Vec<(String, ArgValue)>,
}

impl ToolArgs {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn number(&self, name: &str) -> Result<f64> {
        match self.get(name) {
            Some(ArgValue::Number(n)) => Ok(*n),
            _ => Err(Error::Other(format!("No number argument named '{name}'"))),
        }
    }

    pub fn text(&self, name: &str) -> Result<&str> {
        match self.get(name) {
            Some(ArgValue::Text(s)) => Ok(s),
            _ => Err(Error::Other(format!("No text argument named '{name}'"))),
        }
    }
}

impl fmt::Display for ToolArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// Tool trait - interface for all agent tools
pub trait Tool: Send + Sync {
    /// Tool name used in function calls
    fn name(&self) -> &str;

    /// Description of what the tool does
    fn description(&self) -> &str;

    /// Declared parameters, in order
    fn params(&self) -> Vec<ParamSpec>;

    /// Run the tool; the reply is written in `lang`
    fn execute(&self, args: &ToolArgs, lang: Language) -> Result<String>;

    /// Convert to a tool spec for the LLM
    fn to_spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            params: self.params(),
        }
    }
}

/// Dummy tool for testing
#[cfg(test)]
pub struct DummyTool {
    pub name: String,
    pub result: String,
}

#[cfg(test)]
impl Tool for DummyTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Dummy tool for testing"
    }

    fn params(&self) -> Vec<ParamSpec> {
        vec![]
    }

    fn execute(&self, _args: &ToolArgs, _lang: Language) -> Result<String> {
        Ok(self.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_spec() -> ToolSpec {
        AddTool.to_spec()
    }

    #[test]
    fn test_schema_lists_params_in_order() {
        let schema = add_spec().json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["a"]["type"], "number");
        assert_eq!(schema["required"], json!(["a", "b"]));
    }

    #[test]
    fn test_validate_accepts_declared_types() {
        let args = add_spec().validate(&json!({"a": 2, "b": 3.5, "extra": true})).unwrap();
        assert_eq!(args.number("a").unwrap(), 2.0);
        assert_eq!(args.number("b").unwrap(), 3.5);
        assert_eq!(args.to_string(), "a=2, b=3.5");
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let err = add_spec().validate(&json!({"a": "two", "b": 3})).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { .. }));
        assert!(err.to_string().contains("'a' must be a number"));
    }

    #[test]
    fn test_validate_rejects_missing_and_non_object() {
        assert!(add_spec().validate(&json!({"a": 1})).is_err());
        let err = add_spec().validate(&json!("{not json")).unwrap_err();
        assert!(err.is_tool_error());
    }
}
