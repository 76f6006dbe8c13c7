//! Request extractors that report failures through [`ApiError`](crate::error::ApiError).

mod client_meta;
mod params;

pub use client_meta::ClientMeta;
pub use params::{OptionalJson, QueryParams, UserIdPath};
