//! User handlers.
//!
//! The routes are documented as admin-only but no authorization is enforced.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use common::{AppError, ErrorResponse};
use domain::{CreateUserResponse, DeleteUserResponse, UserResponse, USER_DELETED_STATUS};

use crate::error::ApiError;
use crate::extractors::{OptionalJson, QueryParams, UserIdPath};
use crate::state::AppState;

/// User creation parameters, accepted in the query string or a JSON body
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CreateUserRequest {
    /// Username; stored as the user's email
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Accepted but not stored
    pub password: Option<String>,
}

/// User update parameters, accepted in the query string or a JSON body
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct UpdateUserRequest {
    /// New email address
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    /// New role: `Admin` or `User`
    #[schema(example = "Admin")]
    pub role: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user)).route(
        "/:user_id",
        get(get_user).put(update_user).delete(delete_user),
    )
}

/// Create a user with role `User`
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    params(CreateUserRequest),
    request_body(content = CreateUserRequest, description = "Alternative to query parameters"),
    responses(
        (status = 200, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Missing username", body = ErrorResponse),
        (status = 500, description = "Duplicate username or store failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<CreateUserRequest>,
    OptionalJson(body): OptionalJson<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let body = body.unwrap_or_default();
    let username = query
        .username
        .or(body.username)
        .ok_or_else(|| ApiError::rejected(AppError::bad_request("username is required")))?;
    let password = query.password.or(body.password);

    let user = state.users.create_user(username, password).await?;
    Ok(Json(CreateUserResponse::from(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 500, description = "User not found or store failure", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.get_user(user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update a user's email and/or role
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        UpdateUserRequest
    ),
    request_body(content = UpdateUserRequest, description = "Alternative to query parameters"),
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 500, description = "Invalid role, user not found or store failure", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    QueryParams(query): QueryParams<UpdateUserRequest>,
    OptionalJson(body): OptionalJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let body = body.unwrap_or_default();
    let email = query.email.or(body.email);
    let role = query.role.or(body.role);

    let user = state.users.update_user(user_id, email, role).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user and its request logs
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    state
        .users
        .delete_user(user_id)
        .await
        .map_err(ApiError::not_found_aware)?;

    Ok(Json(DeleteUserResponse::new(USER_DELETED_STATUS)))
}
