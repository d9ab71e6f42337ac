// src/companion/mod.rs
// Chat companion: per-session context and sentiment-aware replies

pub mod persona;

use crate::error::MindfulError;
use crate::llm::{LlmClient, Message, Provider, Role};
use crate::sentiment::SentimentResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

pub use persona::{COMPANION_PROMPT, EMPATHY_ADDENDUM, GREETING};

const APOLOGY: &str =
    "I'm sorry, I couldn't reach my language service just now. Please try again in a moment.";

/// One turn of the conversation as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Session state owned by the caller; nothing here is persisted
#[derive(Debug, Clone)]
pub struct ConversationContext {
    turns: Vec<ChatTurn>,
    mood_logged_today: bool,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationContext {
    /// New session opening with the greeting
    pub fn new() -> Self {
        Self {
            turns: vec![ChatTurn::assistant(GREETING)],
            mood_logged_today: false,
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::assistant(content));
    }

    pub fn mood_logged_today(&self) -> bool {
        self.mood_logged_today
    }

    pub fn mark_mood_logged(&mut self) {
        self.mood_logged_today = true;
    }

    /// Back to a fresh session
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// System instructions plus history. The opening greeting is not sent.
pub fn build_messages(
    context: &ConversationContext,
    sentiment: Option<&SentimentResult>,
) -> Vec<Message> {
    let mut system = COMPANION_PROMPT.to_string();
    if sentiment.is_some_and(SentimentResult::is_distressed) {
        system.push_str("\n\n");
        system.push_str(EMPATHY_ADDENDUM);
    }

    let mut messages = Vec::with_capacity(context.turns.len() + 1);
    messages.push(Message::system(system));
    messages.extend(
        context
            .turns
            .iter()
            .enumerate()
            .filter(|(i, turn)| !(*i == 0 && turn.role == Role::Assistant))
            .map(|(_, turn)| Message {
                role: turn.role,
                content: turn.content.clone(),
            }),
    );
    messages
}

/// Shown instead of a reply when no provider key is configured
pub fn missing_credential_message(provider: Provider) -> String {
    format!(
        "The {} chat companion is unavailable ({}). Mood logging and sentiment tracking still work.",
        provider.display_name(),
        MindfulError::MissingCredential(provider.api_key_env_var())
    )
}

/// Produces the companion's replies
pub struct Companion {
    client: Option<Arc<dyn LlmClient>>,
    provider: Provider,
}

impl Companion {
    pub fn new(provider: Provider, client: Option<Arc<dyn LlmClient>>) -> Self {
        Self { client, provider }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    /// Reply to the latest turn. Never fails: problems become a message for the user.
    pub async fn respond(
        &self,
        context: &ConversationContext,
        sentiment: Option<&SentimentResult>,
    ) -> String {
        let Some(client) = &self.client else {
            info!(provider = %self.provider, "Chat requested without credentials");
            return missing_credential_message(self.provider);
        };

        let messages = build_messages(context, sentiment);
        debug!(
            messages = messages.len(),
            empathy = sentiment.is_some_and(SentimentResult::is_distressed),
            "Requesting companion reply"
        );

        match client.chat(messages).await {
            Ok(result) => match result.content {
                Some(text) if !text.trim().is_empty() => text.trim().to_string(),
                _ => {
                    error!(request_id = %result.request_id, "Companion reply was empty");
                    APOLOGY.to_string()
                }
            },
            Err(e) => {
                error!(provider = %self.provider, error = %e, "Companion request failed");
                APOLOGY.to_string()
            }
        }
    }
}
