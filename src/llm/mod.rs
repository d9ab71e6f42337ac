// src/llm/mod.rs
// LLM inference clients (Gemini, OpenAI) behind a single request/response trait

mod factory;
mod gemini;
mod http_client;
mod logging;
mod openai;
mod provider;
mod types;

pub use factory::client_for;
pub use gemini::GeminiClient;
pub use http_client::LlmHttpClient;
pub use openai::OpenAiClient;
pub use provider::{LlmClient, Provider};
pub use types::{ChatResult, Message, Role};
