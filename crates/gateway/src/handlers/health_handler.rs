//! Health check handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response: overall status plus the database probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: DatabaseHealth,
}

/// Outcome of the database ping.
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// `200 healthy` when the database answers, otherwise `503 degraded`.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.database.ping().await {
        Ok(()) => {
            let body = HealthResponse {
                status: "healthy",
                database: DatabaseHealth {
                    status: "healthy",
                    error: None,
                },
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            let body = HealthResponse {
                status: "degraded",
                database: DatabaseHealth {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                },
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
