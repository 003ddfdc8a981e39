//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::agent::llm::openai::OPENAI_API_BASE;
use crate::error::Error;
use crate::i18n::Language;
use crate::Result;

/// Environment variable holding the model API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Model API key, taken from the environment only
    #[serde(skip)]
    pub api_key: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default)]
    pub temperature: f32,

    /// Maximum model calls per user turn
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Language a new session starts in
    #[serde(default)]
    pub language: Language,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_iterations() -> usize {
    10
}

fn default_api_base() -> String {
    OPENAI_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            temperature: 0.0,
            max_iterations: default_max_iterations(),
            api_base: default_api_base(),
            language: Language::default(),
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".toolchat")
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration from the default file and the process environment
pub fn load() -> Result<Config> {
    load_with(&config_path(), |key| std::env::var(key).ok())
}

/// Load configuration from `path` (optional) and an environment lookup.
///
/// A missing file means defaults. A missing or blank API key is an error.
pub fn load_with(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {:?}: {}", path, e)))?
    } else {
        Config::default()
    };

    if let Some(model) = env("TOOLCHAT_MODEL").filter(|v| !v.trim().is_empty()) {
        config.model = model;
    }
    if let Some(base) = env("OPENAI_API_BASE").filter(|v| !v.trim().is_empty()) {
        config.api_base = base;
    }

    config.api_key = env(API_KEY_VAR)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            Error::Config(format!("{API_KEY_VAR} not found in environment variables!"))
        })?;

    Ok(config)
}

/// Save configuration to file (the API key is never written)
pub fn save(config: &Config) -> Result<()> {
    let path = config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = load_with(&path, env_of(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY not found"));

        let err = load_with(&path, env_of(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_file_and_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"model": "gpt-4o-mini", "language": "ru"}"#).unwrap();

        let config = load_with(&path, env_of(&[(API_KEY_VAR, "sk-abc")])).unwrap();
        assert_eq!(config.api_key, "sk-abc");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.language, Language::Ru);
        assert_eq!(config.max_iterations, 10);

        let config = load_with(
            &path,
            env_of(&[(API_KEY_VAR, "sk-abc"), ("TOOLCHAT_MODEL", "gpt-4o")]),
        )
        .unwrap();
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_with(&path, env_of(&[(API_KEY_VAR, "sk-abc")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = Config {
            api_key: "sk-secret".to_string(),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model, config.model);
    }
}
