//! Failure responses for route handlers.
//!
//! Every failure is rendered as `{"error": "<message>"}`. Status selection
//! keeps the behaviour existing clients were built against:
//!
//! - service failures answer 500 whatever their kind, including not-found
//!   and invalid-argument;
//! - the delete route opts in to 404 for a missing user via
//!   [`ApiError::not_found_aware`];
//! - request decoding failures (bad path id, malformed body) use the
//!   conventional 4xx status of the error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use common::{AppError, ErrorResponse};

/// Error returned by route handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn with_status(status: StatusCode, err: AppError) -> Self {
        Self {
            status,
            code: err.code(),
            message: err.user_message(),
        }
    }

    /// Service failure; always 500.
    pub fn service(err: AppError) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// Service failure where a missing entity answers 404.
    pub fn not_found_aware(err: AppError) -> Self {
        if err.is_not_found() {
            Self::with_status(StatusCode::NOT_FOUND, err)
        } else {
            Self::service(err)
        }
    }

    /// Request could not be decoded.
    pub fn rejected(err: AppError) -> Self {
        let status = err.status();
        Self::with_status(status, err)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, message = %self.message, "Error processing request");
        } else {
            tracing::debug!(status = %self.status, code = self.code, "Request failed");
        }

        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}
