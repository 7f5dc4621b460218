//! Request extractors shared by the customer handlers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{error::AppError, models::customer::CustomerId};

/// The `{id}` path segment, parsed as a [`CustomerId`].
///
/// Any segment that is not a non-negative integer, including one that does
/// not percent-decode to UTF-8, is rejected with `{"error": "Invalid ID"}`.
#[derive(Debug, Clone, Copy)]
pub struct CustomerIdPath(pub CustomerId);

impl<S> FromRequestParts<S> for CustomerIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(reason = %rejection.body_text(), "Invalid ID");
                AppError::InvalidId
            })?;

        raw.parse::<CustomerId>()
            .map(Self)
            .inspect_err(|_| tracing::warn!(id = %raw, "Invalid ID"))
    }
}
