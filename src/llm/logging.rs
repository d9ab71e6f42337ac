// src/llm/logging.rs
// Shared LLM logging helpers

use tracing::{debug, info};

/// Log the start of a request
pub fn log_request(request_id: &str, provider: &str, model: &str, message_count: usize) {
    debug!(
        request_id = %request_id,
        model = %model,
        message_count = message_count,
        "Starting {} request", provider
    );
}

/// Log completion summary for an LLM call
pub fn log_completion(request_id: &str, provider: &str, duration_ms: u64, content_len: usize) {
    info!(
        request_id = %request_id,
        duration_ms = duration_ms,
        content_len = content_len,
        "{} request complete", provider
    );
}
