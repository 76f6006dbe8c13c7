//! HTTP handlers.

pub mod health_handler;
pub mod hello_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use hello_handler::hello_routes;
pub use user_handler::user_routes;
