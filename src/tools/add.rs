//! Add tool - sums two numbers

use crate::i18n::Language;
use crate::Result;
use super::{ParamSpec, ParamType, Tool, ToolArgs};

/// Adds `a` and `b` and states the result in the session language
pub struct AddTool;

impl Tool for AddTool {
    fn name(&self) -> &str { "add" }
    fn description(&self) -> &str { "Useful for performing basic arithmetic calculations with numbers" }

    fn params(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::new("a", ParamType::Number),
            ParamSpec::new("b", ParamType::Number),
        ]
    }

    fn execute(&self, args: &ToolArgs, lang: Language) -> Result<String> {
        let a = args.number("a")?;
        let b = args.number("b")?;
        let sum = a + b;

        Ok(match lang {
            Language::En => format!("The sum of {a} and {b} is {sum}"),
            Language::Ru => format!("Сумма {a} и {b} равна {sum}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(a: f64, b: f64, lang: Language) -> String {
        let args = AddTool.to_spec().validate(&json!({"a": a, "b": b})).unwrap();
        AddTool.execute(&args, lang).unwrap()
    }

    #[test]
    fn test_add_english() {
        assert_eq!(run(4.0, 5.0, Language::En), "The sum of 4 and 5 is 9");
        assert!(run(2.0, 3.0, Language::En).contains('5'));
    }

    #[test]
    fn test_add_russian() {
        assert_eq!(run(4.0, 5.0, Language::Ru), "Сумма 4 и 5 равна 9");
    }

    #[test]
    fn test_add_fractions_and_negatives() {
        assert!(run(1.5, -0.25, Language::En).ends_with("is 1.25"));
        assert!(run(-10.0, 3.0, Language::En).ends_with("is -7"));
    }
}
