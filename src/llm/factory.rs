// src/llm/factory.rs
// Builds the configured provider client when its credential is present

use crate::config::{ApiKeys, LlmConfig};
use crate::llm::{GeminiClient, LlmClient, LlmHttpClient, OpenAiClient, Provider};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Create a client for `provider`, or `None` when no API key is configured
pub fn client_for(
    provider: Provider,
    keys: &ApiKeys,
    config: &LlmConfig,
) -> Option<Arc<dyn LlmClient>> {
    let Some(api_key) = keys.get(provider) else {
        info!(provider = %provider, env_var = provider.api_key_env_var(), "No API key, remote client disabled");
        return None;
    };

    let model = config
        .model
        .clone()
        .unwrap_or_else(|| provider.default_model().to_string());
    let http = LlmHttpClient::new(Duration::from_secs(config.timeout_secs.max(1)))
        .with_max_retries(config.max_retries);

    let client: Arc<dyn LlmClient> = match provider {
        Provider::Gemini => Arc::new(GeminiClient::new(api_key.to_string(), model, http)),
        Provider::OpenAi => Arc::new(OpenAiClient::new(api_key.to_string(), model, http)),
    };
    Some(client)
}
