//! Black-box tests for the HTTP API.
//!
//! The router runs against the real services over an in-memory SQLite
//! database; requests go through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{AppError, DatabaseConfig};
use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use user_service_lib::infra::Database;
use user_service_lib::repository::entities::hello_request_log;
use user_service_lib::repository::MockRequestLogRepository;
use user_service_lib::service::HelloService;
use user_service_lib::Services;

// =============================================================================
// Helpers
// =============================================================================

async fn test_database() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    Database::connect(&config).await.unwrap()
}

async fn test_app() -> (Router, Database) {
    let db = test_database().await;
    let state = AppState::from_database(db.clone(), &GatewayConfig::default());
    (create_router(state), db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create_alice(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        request(Method::POST, "/api/v1/users?username=alice&password=pw"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}

async fn hello_log_count(db: &Database) -> u64 {
    hello_request_log::Entity::find()
        .count(db.connection())
        .await
        .unwrap()
}

// =============================================================================
// Hello
// =============================================================================

#[tokio::test]
async fn test_hello_world_greets_and_logs() {
    let (app, db) = test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/hello-world")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello, World!"}));
    assert_eq!(hello_log_count(&db).await, 1);
}

#[tokio::test]
async fn test_say_hello_greets_and_logs() {
    let (app, db) = test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/api/v1/hello")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello, world!"}));
    assert_eq!(hello_log_count(&db).await, 1);
}

#[tokio::test]
async fn test_hello_records_caller_metadata() {
    let (app, db) = test_app().await;

    let request = Request::builder()
        .uri("/api/v1/hello")
        .header(header::USER_AGENT, "integration-test/1.0")
        .header("x-forwarded-for", "198.51.100.4, 10.0.0.1")
        .body(Body::empty())
        .unwrap();
    send(&app, request).await;

    let row = hello_request_log::Entity::find()
        .one(db.connection())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.user_id, None);
    assert_eq!(row.user_agent.as_deref(), Some("integration-test/1.0"));
    assert_eq!(row.ip_address.as_deref(), Some("198.51.100.4"));
}

#[tokio::test]
async fn test_hello_answers_when_logging_fails() {
    let db = test_database().await;
    let services = Services::new(db.get_connection());

    let mut logs = MockRequestLogRepository::new();
    logs.expect_record_hello()
        .times(2)
        .returning(|_| Err(AppError::internal("log write failed")));
    let logs = Arc::new(logs);

    let state = AppState::new(
        services.users.clone(),
        Arc::new(HelloService::new(logs.clone(), "Hello, World!")),
        Arc::new(HelloService::new(logs, "Hello, world!")),
        db,
    );
    let app = create_router(state);

    let (status, body) = send(&app, request(Method::GET, "/hello-world")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, World!");

    let (status, body) = send(&app, request(Method::GET, "/api/v1/hello")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, world!");
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_create_user_from_query() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        request(Method::POST, "/api/v1/users?username=alice&password=pw"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "username": "alice", "email": null, "role": "User"})
    );
}

#[tokio::test]
async fn test_create_user_from_json_body() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/v1/users", json!({"username": "bob"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "bob");
    assert_eq!(body["role"], "User");
}

#[tokio::test]
async fn test_create_user_requires_username() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, request(Method::POST, "/api/v1/users?password=pw")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid input: username is required"}));
}

#[tokio::test]
async fn test_duplicate_username_is_500() {
    let (app, _db) = test_app().await;
    create_alice(&app).await;

    let (status, body) = send(&app, request(Method::POST, "/api/v1/users?username=alice")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Email already exists"}));
}

#[tokio::test]
async fn test_read_user() {
    let (app, _db) = test_app().await;
    let id = create_alice(&app).await;

    let (status, body) = send(&app, request(Method::GET, &format!("/api/v1/users/{}", id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "email": "alice", "role": "User"}));
}

#[tokio::test]
async fn test_read_missing_user_is_500() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/api/v1/users/99")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_non_integer_user_id_is_rejected() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/api/v1/users/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_role_keeps_email() {
    let (app, _db) = test_app().await;
    let id = create_alice(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/users/{}", id),
            json!({"email": null, "role": "Admin"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "email": "alice", "role": "Admin"}));
}

#[tokio::test]
async fn test_update_email_from_query_keeps_role() {
    let (app, _db) = test_app().await;
    let id = create_alice(&app).await;

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            &format!("/api/v1/users/{}?email=alice@example.com", id),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": id, "email": "alice@example.com", "role": "User"})
    );
}

#[tokio::test]
async fn test_update_invalid_role_is_500_without_mutation() {
    let (app, _db) = test_app().await;
    let id = create_alice(&app).await;
    let uri = format!("/api/v1/users/{}", id);

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            &uri,
            json!({"email": "mallory", "role": "Moderator"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": r#"Invalid role. Allowed values are "Admin" and "User"."#})
    );

    let (_, body) = send(&app, request(Method::GET, &uri)).await;
    assert_eq!(body, json!({"id": id, "email": "alice", "role": "User"}));
}

#[tokio::test]
async fn test_update_missing_user_is_500() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        json_request(Method::PUT, "/api/v1/users/5", json!({"role": "User"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "User with ID 5 does not exist."}));
}

#[tokio::test]
async fn test_delete_user_then_read_fails() {
    let (app, db) = test_app().await;
    let id = create_alice(&app).await;
    let uri = format!("/api/v1/users/{}", id);

    let (status, body) = send(&app, request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "User successfully deleted"}));

    let (status, body) = send(&app, request(Method::GET, &uri)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "User not found"}));

    // Anonymous hello logs are not tied to the user
    send(&app, request(Method::GET, "/hello-world")).await;
    assert_eq!(hello_log_count(&db).await, 1);
}

#[tokio::test]
async fn test_delete_missing_user_is_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, request(Method::DELETE, "/api/v1/users/42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

// =============================================================================
// Health & docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "database": {"status": "healthy"}}));
}

#[tokio::test]
async fn test_health_degraded_after_close() {
    let (app, db) = test_app().await;
    db.close().await.unwrap();

    let (status, body) = send(&app, request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"]["status"], "unhealthy");
    assert!(body["database"]["error"].is_string());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, request(Method::GET, "/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "hello world");
    assert!(body["paths"]["/api/v1/users/{user_id}"].is_object());
    assert!(body["paths"]["/hello-world"].is_object());

    let schemas = &body["components"]["schemas"];
    assert_eq!(
        schemas["UserResponse"]["properties"]["email"]["example"],
        "alice@example.com"
    );
    assert_eq!(
        schemas["DeleteUserResponse"]["properties"]["status"]["example"],
        "User successfully deleted"
    );
}
