//! Hello service - returns a fixed greeting and records the request.

use std::sync::Arc;

use domain::{HelloResponse, NewHelloRequestLog, RequestMetadata};

use crate::repository::RequestLogRepository;

/// Greets callers with a configured message.
///
/// Each call appends one hello request log row. A failed write is logged and
/// otherwise ignored, so `greet` cannot fail.
pub struct HelloService {
    logs: Arc<dyn RequestLogRepository>,
    message: String,
}

impl HelloService {
    /// Create a hello service answering with `message`
    pub fn new(logs: Arc<dyn RequestLogRepository>, message: impl Into<String>) -> Self {
        Self {
            logs,
            message: message.into(),
        }
    }

    /// The greeting this instance answers with
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Record the request and return the greeting.
    pub async fn greet(&self, metadata: RequestMetadata) -> HelloResponse {
        if let Err(e) = self.logs.record_hello(NewHelloRequestLog::now(metadata)).await {
            tracing::warn!(error = ?e, "Failed to record hello request");
        }

        HelloResponse {
            message: self.message.clone(),
        }
    }
}
