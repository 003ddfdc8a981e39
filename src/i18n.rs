//! Display languages and their string tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Display language of a chat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Localized interface strings
pub struct Strings {
    pub title: &'static str,
    pub input: &'static str,
    pub system: &'static str,
    pub tool_calls: &'static str,
    pub switch_label: &'static str,
    pub current: &'static str,
    pub goodbye: &'static str,
}

const EN: Strings = Strings {
    title: "🤖 Chatbot with Tools",
    input: "Type your message...",
    system: "You are a helpful assistant. You can use tools if needed.",
    tool_calls: "🔧 Tool Calls",
    switch_label: "Switch to Russian",
    current: "Current",
    goodbye: "Bye!",
};

const RU: Strings = Strings {
    title: "🤖 Чат-бот с инструментами",
    input: "Введите ваше сообщение...",
    system: "Вы полезный помощник. Вы можете использовать инструменты при необходимости.",
    tool_calls: "🔧 Вызовы инструментов",
    switch_label: "Переключить на английский",
    current: "Текущий",
    goodbye: "Пока!",
};

impl Language {
    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Name of the language written in that language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Ru => &RU,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ru" | "russian" => Ok(Language::Ru),
            other => Err(Error::Config(format!("Unsupported language: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for lang in [Language::En, Language::Ru] {
            assert_eq!(lang.toggle().toggle(), lang);
            assert_ne!(lang.toggle(), lang);
        }
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Ru);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_strings_differ_per_language() {
        assert_ne!(Language::En.strings().system, Language::Ru.strings().system);
        assert_eq!(Language::default(), Language::En);
    }
}
