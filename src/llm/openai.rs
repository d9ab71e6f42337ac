// src/llm/openai.rs
// OpenAI-compatible chat completions client

use crate::llm::http_client::LlmHttpClient;
use crate::llm::logging::{log_completion, log_request};
use crate::llm::provider::{LlmClient, Provider};
use crate::llm::{ChatResult, Message};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{Span, instrument};
use uuid::Uuid;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 300;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat completions client
pub struct OpenAiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: LlmHttpClient,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String, http: LlmHttpClient) -> Self {
        Self {
            api_key,
            model,
            base_url: OPENAI_API_BASE.to_string(),
            http,
        }
    }

    /// Point the client at a different endpoint root (compatible servers, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn provider_type(&self) -> Provider {
        Provider::OpenAi
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }

    #[instrument(skip(self, messages), fields(request_id, model = %self.model))]
    async fn chat(&self, messages: Vec<Message>) -> Result<ChatResult> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();
        Span::current().record("request_id", &request_id);
        log_request(&request_id, "OpenAI", &self.model, messages.len());

        let body = serde_json::to_string(&ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            max_tokens: MAX_TOKENS,
        })?;
        let url = format!("{}/chat/completions", self.base_url);

        let response_body = self
            .http
            .execute_request_with_retry(&request_id, body, |client, body| {
                client
                    .post(&url)
                    .bearer_auth(&self.api_key)
                    .header("Content-Type", "application/json")
                    .body(body)
            })
            .await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let data: ChatCompletionResponse = serde_json::from_str(&response_body)
            .map_err(|e| anyhow!("Failed to parse OpenAI response: {}", e))?;
        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty());

        log_completion(
            &request_id,
            "OpenAI",
            duration_ms,
            content.as_ref().map(|c| c.len()).unwrap_or(0),
        );

        Ok(ChatResult {
            request_id,
            content,
            duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let messages = vec![Message::system("sys"), Message::user("hi")];
        let json = serde_json::to_value(ChatCompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            max_tokens: MAX_TOKENS,
        })
        .unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_response_null_content() {
        let data: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(data.choices[0].message.content.is_none());
    }
}
