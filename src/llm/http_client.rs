// src/llm/http_client.rs
// Shared HTTP client configuration for all LLM providers

use anyhow::{Result, anyhow};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Default retry count for transient failures (one retry, then give up)
const DEFAULT_MAX_RETRIES: u32 = 1;
/// Base backoff between retries (doubles each attempt)
const DEFAULT_BASE_BACKOFF_MS: u64 = 250;
/// Connect timeout; the request timeout comes from configuration
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Shared HTTP client configuration for all LLM providers
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_retries: u32,
    pub base_backoff: Duration,
}

impl LlmHttpClient {
    pub fn new(request_timeout: Duration) -> Self {
        let connect_timeout = Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS).min(request_timeout);
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            request_timeout,
            connect_timeout,
            max_retries: DEFAULT_MAX_RETRIES,
            base_backoff: Duration::from_millis(DEFAULT_BASE_BACKOFF_MS),
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    /// Execute HTTP request with retry logic using a custom request builder.
    ///
    /// The `build_request` closure is called on each attempt with the reqwest Client
    /// and the request body, allowing callers to customize URL, headers, and auth.
    /// Returns the response body as text on success.
    pub async fn execute_request_with_retry<F>(
        &self,
        request_id: &str,
        body: String,
        build_request: F,
    ) -> Result<String>
    where
        F: Fn(&Client, String) -> reqwest::RequestBuilder,
    {
        let mut retries = 0;
        let mut backoff = self.base_backoff;

        loop {
            let response_result = build_request(&self.client, body.clone()).send().await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        let error_body = response.text().await.unwrap_or_default();

                        if retries < self.max_retries
                            && (status.as_u16() == 429 || status.is_server_error())
                        {
                            warn!(
                                request_id = %request_id,
                                status = %status,
                                "Transient error, retrying in {:?}...",
                                backoff
                            );
                            tokio::time::sleep(jittered(backoff)).await;
                            retries += 1;
                            backoff *= 2;
                            continue;
                        }

                        return Err(anyhow!("API error {}: {}", status, error_body));
                    }

                    return Ok(response.text().await?);
                }
                Err(e) => {
                    // Only connect/timeout failures are safe to retry
                    if retries < self.max_retries && (e.is_connect() || e.is_timeout()) {
                        warn!(
                            request_id = %request_id,
                            error = %e.without_url(),
                            "Request failed (connect/timeout), retrying in {:?}...",
                            backoff
                        );
                        tokio::time::sleep(jittered(backoff)).await;
                        retries += 1;
                        backoff *= 2;
                        continue;
                    }
                    return Err(anyhow!("Request failed after retries: {}", e.without_url()));
                }
            }
        }
    }
}

fn jittered(backoff: Duration) -> Duration {
    backoff + Duration::from_millis(rand::random::<u64>() % 50)
}
