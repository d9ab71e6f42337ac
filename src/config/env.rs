// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use crate::config::file::MindfulConfig;
use crate::llm::Provider;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{Level, debug, info, warn};

/// API keys loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// Gemini/Google API key (GEMINI_API_KEY or GOOGLE_API_KEY)
    pub gemini: Option<String>,
    /// OpenAI API key (OPENAI_API_KEY)
    pub openai: Option<String>,
}

impl ApiKeys {
    /// Load API keys from environment variables
    ///
    /// Set `MINDFUL_DISABLE_LLM=1` to suppress all keys (lexicon-only classification)
    pub fn from_env() -> Self {
        if parse_bool_env("MINDFUL_DISABLE_LLM").unwrap_or(false) {
            info!("MINDFUL_DISABLE_LLM is set, remote language services disabled");
            return Self::default();
        }

        let keys = Self {
            gemini: Self::read_key("GEMINI_API_KEY").or_else(|| Self::read_key("GOOGLE_API_KEY")),
            openai: Self::read_key("OPENAI_API_KEY"),
        };
        keys.log_status();
        keys
    }

    /// Read a single API key from environment, filtering empty values
    fn read_key(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|k| !k.trim().is_empty())
    }

    /// Key for a specific provider, if configured
    pub fn get(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Gemini => self.gemini.as_deref(),
            Provider::OpenAi => self.openai.as_deref(),
        }
    }

    /// Check if any LLM provider is available
    pub fn has_llm_provider(&self) -> bool {
        self.gemini.is_some() || self.openai.is_some()
    }

    fn log_status(&self) {
        if self.has_llm_provider() {
            debug!(providers = %self.summary(), "API keys loaded");
        } else {
            warn!("No API keys configured - chat responses and remote sentiment fallback unavailable");
        }
    }

    /// Get a summary of available providers
    pub fn summary(&self) -> String {
        let mut providers = Vec::new();
        if self.gemini.is_some() {
            providers.push("Gemini");
        }
        if self.openai.is_some() {
            providers.push("OpenAI");
        }
        if providers.is_empty() {
            "None".to_string()
        } else {
            providers.join(", ")
        }
    }
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// API keys for LLM providers
    pub api_keys: ApiKeys,
    /// Mood log location override (MINDFUL_DATA_FILE)
    pub data_file: Option<PathBuf>,
    /// Log level override (MINDFUL_LOG)
    pub log_level: Option<Level>,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        Self {
            api_keys: ApiKeys::from_env(),
            data_file: std::env::var("MINDFUL_DATA_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            log_level: std::env::var("MINDFUL_LOG")
                .ok()
                .and_then(|v| parse_log_level(&v)),
        }
    }

    /// Validate environment and file configuration together
    pub fn validate(&self, file: &MindfulConfig) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        match file.provider() {
            Ok(provider) => {
                if self.api_keys.get(provider).is_none() {
                    validation.add_warning(format!(
                        "{} API key is missing. Set {} to enable the chat companion and remote sentiment fallback.",
                        provider.display_name(),
                        provider.api_key_env_var()
                    ));
                }
            }
            Err(e) => validation.add_error(e.to_string()),
        }

        if !file.sentiment.lexicon_enabled && !file.sentiment.remote_enabled {
            validation.add_warning(
                "Both sentiment strategies are disabled; every message will be scored neutral.",
            );
        }

        if file.llm.timeout_secs == 0 {
            validation.add_error("llm.timeout_secs must be greater than zero");
        }

        validation
    }
}

/// "debug", "INFO", ... Unknown or empty values are ignored.
pub(crate) fn parse_log_level(value: &str) -> Option<Level> {
    Level::from_str(value.trim()).ok()
}

pub(crate) fn parse_bool_env(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?.to_lowercase();
    match value.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
