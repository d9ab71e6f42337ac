// src/error.rs
// Standardized error types for Mindful

use thiserror::Error;

/// Main error type for the Mindful library
#[derive(Error, Debug)]
pub enum MindfulError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("mood log format error: {0}")]
    Csv(#[from] csv::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("classification failed: {0}")]
    Classification(String),

    #[error("missing credential: set {0} to enable this feature")]
    MissingCredential(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using MindfulError
pub type Result<T> = std::result::Result<T, MindfulError>;

impl MindfulError {
    /// Message safe to show to the end user
    pub fn to_user_string(&self) -> String {
        match self {
            // Provider errors can echo request details
            Self::Llm(_) => "the language service is unavailable right now".to_string(),
            other => other.to_string(),
        }
    }
}
