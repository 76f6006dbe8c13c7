//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Both the user service and the HTTP gateway speak in these types.

pub mod constants;
pub mod error;
pub mod request_log;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use request_log::{HelloRequestLog, HelloResponse, NewHelloRequestLog, RequestMetadata};
pub use user::{CreateUserResponse, DeleteUserResponse, User, UserResponse, UserRole};
