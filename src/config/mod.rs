// src/config/mod.rs
// Configuration: environment variables and ~/.mindful/config.toml

pub mod env;
pub mod file;

pub use env::{ApiKeys, ConfigValidation, EnvConfig};
pub use file::{LlmConfig, MindfulConfig, SentimentConfig, StoreConfig};
