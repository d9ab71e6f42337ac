// src/config/file.rs
// File-based configuration from ~/.mindful/config.toml

use crate::error::{MindfulError, Result};
use crate::llm::Provider;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default request timeout for remote calls
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: u32 = 1;
const DATA_FILE_NAME: &str = "mood_data.csv";

/// Top-level config structure
#[derive(Debug, Deserialize, Default)]
pub struct MindfulConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// LLM configuration section
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider used for chat and the sentiment fallback ("gemini" or "openai")
    pub provider: Option<String>,
    /// Model override; provider default when absent
    pub model: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: None,
            model: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Which classification strategies take part in the chain
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub lexicon_enabled: bool,
    pub remote_enabled: bool,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            lexicon_enabled: true,
            remote_enabled: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct StoreConfig {
    /// Mood log path; ~/.mindful/mood_data.csv when absent
    pub path: Option<PathBuf>,
}

impl MindfulConfig {
    /// Load config from ~/.mindful/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_dir().join("config.toml"))
    }

    /// Load config from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// ~/.mindful
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mindful")
    }

    /// Configured provider, Gemini when unset
    pub fn provider(&self) -> Result<Provider> {
        match self.llm.provider.as_deref() {
            None => Ok(Provider::Gemini),
            Some(name) => Provider::from_str(name).ok_or_else(|| {
                MindfulError::Config(format!(
                    "unknown llm.provider '{}'. Valid options: gemini, openai",
                    name
                ))
            }),
        }
    }

    /// Resolve the mood log path: explicit override, then config, then default
    pub fn data_file(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.store.path.clone())
            .unwrap_or_else(|| Self::config_dir().join(DATA_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"
timeout_secs = 5

[sentiment]
lexicon_enabled = false

[store]
path = "/tmp/moods.csv"
"#;
        let config: MindfulConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.provider().unwrap(), Provider::OpenAi);
        assert_eq!(config.llm.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.llm.timeout_secs, 5);
        assert_eq!(config.llm.max_retries, DEFAULT_MAX_RETRIES);
        assert!(!config.sentiment.lexicon_enabled);
        assert!(config.sentiment.remote_enabled);
        assert_eq!(config.data_file(None), PathBuf::from("/tmp/moods.csv"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: MindfulConfig = toml::from_str("").unwrap();
        assert_eq!(config.provider().unwrap(), Provider::Gemini);
        assert!(config.sentiment.lexicon_enabled);
        assert_eq!(config.llm.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_unknown_provider() {
        let mut config = MindfulConfig::default();
        config.llm.provider = Some("palm".into());
        assert!(matches!(config.provider(), Err(MindfulError::Config(_))));
    }

    #[test]
    fn test_data_file_override_wins() {
        let mut config = MindfulConfig::default();
        config.store.path = Some(PathBuf::from("/from/config.csv"));
        let path = config.data_file(Some(Path::new("/from/flag.csv")));
        assert_eq!(path, PathBuf::from("/from/flag.csv"));
    }

    #[test]
    fn test_data_file_default() {
        let config = MindfulConfig::default();
        assert!(config.data_file(None).ends_with(".mindful/mood_data.csv"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let config = MindfulConfig::load_from(Path::new("/nonexistent/mindful.toml"));
        assert!(config.llm.provider.is_none());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[llm\nprovider = ").unwrap();
        let config = MindfulConfig::load_from(&path);
        assert!(config.sentiment.lexicon_enabled);
    }
}
