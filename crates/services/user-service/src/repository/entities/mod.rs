//! SeaORM entities.

pub mod access_log;
pub mod hello_request_log;
pub mod user;
