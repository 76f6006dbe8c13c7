//! Repository layer for data access.

pub mod entities;
mod request_log_repository;
mod user_repository;

pub use request_log_repository::{RequestLogRepository, RequestLogStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use request_log_repository::MockRequestLogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
