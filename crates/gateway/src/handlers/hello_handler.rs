//! Hello handlers.
//!
//! Two public routes backed by separate [`HelloService`](user_service_lib::service::HelloService)
//! instances that differ only in their greeting.

use axum::{extract::State, response::Json, routing::get, Router};

use common::ErrorResponse;
use domain::HelloResponse;

use crate::extractors::ClientMeta;
use crate::state::AppState;

/// Create hello routes
pub fn hello_routes() -> Router<AppState> {
    Router::new()
        .route("/hello-world", get(hello_world))
        .route("/api/v1/hello", get(say_hello))
}

/// Return the `Hello, World!` greeting
#[utoipa::path(
    get,
    path = "/hello-world",
    tag = "Hello",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn hello_world(
    State(state): State<AppState>,
    ClientMeta(metadata): ClientMeta,
) -> Json<HelloResponse> {
    Json(state.hello_world.greet(metadata).await)
}

/// Return the `Hello, world!` greeting
#[utoipa::path(
    get,
    path = "/api/v1/hello",
    tag = "Hello",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn say_hello(
    State(state): State<AppState>,
    ClientMeta(metadata): ClientMeta,
) -> Json<HelloResponse> {
    Json(state.say_hello.greet(metadata).await)
}
