//! Hello request log entries and greeting responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller details captured from an incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    /// Authenticated caller, if any. Always `None` while there is no auth layer.
    pub user_id: Option<i32>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Stored hello request log row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloRequestLog {
    pub id: i32,
    /// Anonymous requests have no user
    pub user_id: Option<i32>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Data for appending a hello request log row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHelloRequestLog {
    pub user_id: Option<i32>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl NewHelloRequestLog {
    /// Build a log entry for a request received now.
    pub fn now(metadata: RequestMetadata) -> Self {
        Self {
            user_id: metadata.user_id,
            user_agent: metadata.user_agent,
            ip_address: metadata.ip_address,
            timestamp: Utc::now(),
        }
    }
}

/// Greeting response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HelloResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Hello, World!"))]
    pub message: String,
}
