//! Path, query and body extractors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use common::AppError;

use crate::error::ApiError;

/// Integer `user_id` path segment.
pub struct UserIdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::rejected(AppError::bad_request(e.body_text())))?;

        Ok(UserIdPath(id))
    }
}

/// Query string parameters.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::rejected(AppError::bad_request(e.body_text())))?;

        Ok(QueryParams(value))
    }
}

/// JSON body that may be absent.
///
/// An empty (or whitespace-only) body yields `None`. The content type is not
/// checked so that bare clients sending JSON without headers still work.
pub struct OptionalJson<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::rejected(AppError::bad_request(e.body_text())))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJson(None));
        }

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::rejected(AppError::bad_request(e.to_string())))?;

        Ok(OptionalJson(Some(value)))
    }
}
