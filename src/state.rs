// src/state.rs
// Wires configuration, credentials, classifiers, the mood store and the companion together

use crate::companion::Companion;
use crate::config::{ApiKeys, ConfigValidation, EnvConfig, MindfulConfig};
use crate::error::Result;
use crate::llm::{LlmClient, Provider, client_for};
use crate::mood::MoodStore;
use crate::sentiment::SentimentService;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    // -------- Configuration --------
    pub provider: Provider,
    pub env: Arc<EnvConfig>,
    pub config: Arc<MindfulConfig>,

    // -------- Services --------
    pub sentiment: Arc<SentimentService>,
    pub companion: Arc<Companion>,
    pub store: Arc<MoodStore>,
}

impl AppState {
    /// Build from already-loaded environment settings and ~/.mindful/config.toml.
    /// `data_file` overrides every other store path source.
    pub fn load(env: EnvConfig, data_file: Option<&Path>) -> Result<Self> {
        let config = MindfulConfig::load();
        Self::from_parts(env, config, data_file)
    }

    pub fn from_parts(env: EnvConfig, config: MindfulConfig, data_file: Option<&Path>) -> Result<Self> {
        let provider = config.provider()?;
        let client = client_for(provider, &env.api_keys, &config.llm);
        Ok(Self::with_client(env, config, data_file, provider, client))
    }

    /// Build around an explicit client (custom endpoints, tests)
    pub fn with_client(
        env: EnvConfig,
        config: MindfulConfig,
        data_file: Option<&Path>,
        provider: Provider,
        client: Option<Arc<dyn LlmClient>>,
    ) -> Self {
        let data_path = config.data_file(data_file.or(env.data_file.as_deref()));
        let sentiment = SentimentService::from_config(&config.sentiment, client.clone());
        let companion = Companion::new(provider, client);

        info!(
            provider = %provider,
            data_file = %data_path.display(),
            remote = companion.is_available(),
            "Application state initialized"
        );

        Self {
            provider,
            sentiment: Arc::new(sentiment),
            companion: Arc::new(companion),
            store: Arc::new(MoodStore::new(data_path)),
            env: Arc::new(env),
            config: Arc::new(config),
        }
    }

    pub fn api_keys(&self) -> &ApiKeys {
        &self.env.api_keys
    }

    pub fn validate(&self) -> ConfigValidation {
        self.env.validate(&self.config)
    }
}
