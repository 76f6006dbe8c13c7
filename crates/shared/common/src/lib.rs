//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified service error type and the JSON error envelope
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ErrorResponse, OptionExt};
