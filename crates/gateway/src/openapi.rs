//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::{CreateUserRequest, UpdateUserRequest};
use common::ErrorResponse;
use domain::{CreateUserResponse, DeleteUserResponse, HelloResponse, UserResponse, UserRole};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello world",
        description = "create a simple api that has just one endpoint that returns hello world."
    ),
    paths(
        crate::handlers::hello_handler::hello_world,
        crate::handlers::hello_handler::say_hello,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            HelloResponse,
            CreateUserRequest,
            CreateUserResponse,
            UpdateUserRequest,
            UserResponse,
            UserRole,
            DeleteUserResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Hello", description = "Greeting endpoints"),
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
