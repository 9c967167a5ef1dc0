//! # API Errors
//!
//! The five failure kinds recognized by the trivia API, each mapped to a
//! fixed status code and a fixed human-readable message. Every failing
//! request is answered with the same envelope:
//! `{success: false, message, status_code}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed or invalid request (missing/falsy fields, unknown
    /// category on create, unparseable body)
    #[error("Bad Request")]
    BadRequest,

    /// The requested resource does not exist
    #[error("Resource Not Found")]
    NotFound,

    /// The request is well-formed but cannot be satisfied (e.g. the quiz
    /// category is exhausted)
    #[error("Unprocessable")]
    Unprocessable,

    /// The route exists but does not support the request method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The store failed; details are logged, not surfaced
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "store operation failed");
        ApiError::Internal
    }
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub status_code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            status_code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
