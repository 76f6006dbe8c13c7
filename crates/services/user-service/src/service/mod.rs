//! Service layer - application use cases.

mod hello_service;
mod user_service;

pub use hello_service::HelloService;
pub use user_service::{UserManager, UserService};
