// tests/sentiment_fallback_test.rs
// Remote fallback classification and companion replies against mock provider endpoints

use mindful::companion::{Companion, ConversationContext};
use mindful::config::SentimentConfig;
use mindful::llm::{GeminiClient, LlmClient, LlmHttpClient, OpenAiClient, Provider};
use mindful::sentiment::{SentimentService, SentimentSource};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

const GEMINI_PATH: &str = "/gemini-1.5-pro:generateContent";

fn http() -> LlmHttpClient {
    LlmHttpClient::new(Duration::from_secs(5)).with_base_backoff(Duration::from_millis(1))
}

fn gemini(server: &MockServer) -> Arc<dyn LlmClient> {
    Arc::new(
        GeminiClient::new("test-key".into(), "gemini-1.5-pro".into(), http())
            .with_base_url(server.uri()),
    )
}

fn openai(server: &MockServer) -> Arc<dyn LlmClient> {
    Arc::new(OpenAiClient::new("sk-test".into(), "gpt-4o".into(), http()).with_base_url(server.uri()))
}

fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

fn remote_only() -> SentimentConfig {
    SentimentConfig {
        lexicon_enabled: false,
        remote_enabled: true,
    }
}

// ============================================================================
// Gemini fallback
// ============================================================================

#[tokio::test]
async fn test_gemini_line_format_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(
            "Sentiment score: 2\nSentiment label: sad\nConfidence: 0.8",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let service = SentimentService::from_config(&remote_only(), Some(gemini(&server)));
    let result = service.classify("I miss my friends").await;

    assert_eq!(result.score(), 2);
    assert_eq!(result.label(), "sad");
    assert_eq!(result.confidence(), 0.8);
    assert_eq!(result.source(), SentimentSource::Remote);
}

#[tokio::test]
async fn test_gemini_free_text_reply_uses_heuristic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_reply("The overall tone is clearly positive.")),
        )
        .mount(&server)
        .await;

    let service = SentimentService::from_config(&remote_only(), Some(gemini(&server)));
    let result = service.classify("We won the match").await;

    assert_eq!(result.score(), 4);
    assert_eq!(result.label(), "happy");
    assert_eq!(result.confidence(), 0.7);
}

#[tokio::test]
async fn test_server_error_retries_once_then_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(2)
        .mount(&server)
        .await;

    let service = SentimentService::from_config(&remote_only(), Some(gemini(&server)));
    let result = service.classify("anything").await;

    assert_eq!(result.score(), 3);
    assert_eq!(result.label(), "neutral");
    assert_eq!(result.confidence(), 0.1);
    assert_eq!(result.source(), SentimentSource::Default);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("bad key"))
        .expect(1)
        .mount(&server)
        .await;

    let service = SentimentService::from_config(&remote_only(), Some(gemini(&server)));
    assert_eq!(service.classify("anything").await.source(), SentimentSource::Default);
}

#[tokio::test]
async fn test_blocked_candidate_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [{}] })))
        .mount(&server)
        .await;

    let service = SentimentService::from_config(&remote_only(), Some(gemini(&server)));
    assert_eq!(service.classify("anything").await.source(), SentimentSource::Default);
}

#[tokio::test]
async fn test_lexicon_answers_before_remote() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let service = SentimentService::from_config(&SentimentConfig::default(), Some(gemini(&server)));
    let result = service.classify("What a wonderful, happy day!").await;

    assert_eq!(result.source(), SentimentSource::Lexicon);
    assert_eq!(result.label(), "happy");
}

// ============================================================================
// OpenAI fallback
// ============================================================================

#[tokio::test]
async fn test_openai_json_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "{\"sentiment_score\": 7, \"sentiment_label\": \"Happy\", \"confidence\": 0.95}"
                }
            }]
        })))
        .mount(&server)
        .await;

    let service = SentimentService::from_config(&remote_only(), Some(openai(&server)));
    let result = service.classify("Best day ever").await;

    assert_eq!(result.score(), 5);
    assert_eq!(result.label(), "happy");
    assert_eq!(result.confidence(), 0.95);
}

// ============================================================================
// Companion
// ============================================================================

#[tokio::test]
async fn test_companion_reply_through_openai() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "That sounds hard. I'm here with you." } }]
        })))
        .mount(&server)
        .await;

    let companion = Companion::new(Provider::OpenAi, Some(openai(&server)));
    let mut context = ConversationContext::new();
    context.push_user("Rough week");

    let reply = companion.respond(&context, None).await;
    assert_eq!(reply, "That sounds hard. I'm here with you.");
}

#[tokio::test]
async fn test_companion_failure_is_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let companion = Companion::new(Provider::Gemini, Some(gemini(&server)));
    let reply = companion.respond(&ConversationContext::new(), None).await;
    assert!(reply.starts_with("I'm sorry"));
}
