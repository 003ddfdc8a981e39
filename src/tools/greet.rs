//! Greet tool - says hello to someone

use crate::i18n::Language;
use crate::Result;
use super::{ParamSpec, ParamType, Tool, ToolArgs};

/// Greets `name` in the session language
pub struct GreetTool;

impl Tool for GreetTool {
    fn name(&self) -> &str { "greet" }
    fn description(&self) -> &str { "Useful for greeting a user" }

    fn params(&self) -> Vec<ParamSpec> {
        vec![ParamSpec::new("name", ParamType::Text)]
    }

    fn execute(&self, args: &ToolArgs, lang: Language) -> Result<String> {
        let name = args.text("name")?;

        Ok(match lang {
            Language::En => format!("Hello {name}, I hope you are well today"),
            Language::Ru => format!("Привет {name}, надеюсь, у тебя всё хорошо"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(name: &str, lang: Language) -> String {
        let args = GreetTool.to_spec().validate(&json!({ "name": name })).unwrap();
        GreetTool.execute(&args, lang).unwrap()
    }

    #[test]
    fn test_greet_keeps_name_verbatim() {
        for name in ["Alice", "  spaced  ", "Анна", "O'Brien {x}"] {
            assert!(run(name, Language::En).contains(name));
            assert!(run(name, Language::Ru).contains(name));
        }
    }

    #[test]
    fn test_greet_language() {
        assert_eq!(run("Bob", Language::En), "Hello Bob, I hope you are well today");
        assert!(run("Bob", Language::Ru).starts_with("Привет Bob"));
    }
}
