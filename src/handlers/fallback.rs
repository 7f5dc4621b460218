//! Responses for requests that match no handler.

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Path is known but no handler is registered for this method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::warn!(%method, %uri, "Method not allowed");
    AppError::MethodNotAllowed
}

/// No route matches the path.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    tracing::warn!(%method, %uri, "Route not found");
    AppError::RouteNotFound
}
