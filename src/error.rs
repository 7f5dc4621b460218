//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::StoreError;

/// Application-wide error type.
///
/// Each variant maps to one HTTP status code.
///
/// # Error Categories
///
/// - **Request shape**: body is not valid JSON for the expected type
/// - **Validation**: name/age violate the create or update rules
/// - **Identifier**: path id is not a non-negative integer
/// - **Resource**: customer does not exist
/// - **Persistence**: the store failed
/// - **Routing**: unknown path or unsupported method
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be parsed.
    ///
    /// Returns HTTP 400 with the parser's message.
    #[error("{0}")]
    MalformedBody(String),

    /// Parsed body violates a field rule.
    ///
    /// Returns HTTP 400.
    #[error("{0}")]
    Validation(&'static str),

    /// Returns HTTP 400.
    #[error("Invalid ID")]
    InvalidId,

    /// Returns HTTP 404.
    #[error("Customer not found")]
    CustomerNotFound,

    /// Store operation failed (connection error, constraint violation, ...).
    ///
    /// Returns HTTP 500 with the store's message.
    #[error(transparent)]
    Store(StoreError),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) | AppError::Validation(_) | AppError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            AppError::CustomerNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A row that vanished between lookup and write is reported as not found;
/// every other store failure is a 500.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::CustomerNotFound,
            other => AppError::Store(other),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Customer not found" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
