//! Customer data model and API request types.
//!
//! This module defines:
//! - `CustomerId`: validated identifier taken from the URL path
//! - `Customer`: database entity, also the response body
//! - `NewCustomer`: validated input for inserting a customer
//! - `CreateCustomerRequest` / `UpdateCustomerRequest`: JSON request bodies

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Message returned when a create request fails validation.
pub const CREATE_VALIDATION_MESSAGE: &str = "Name and a positive Age are required";

/// Message returned when an update request fails validation.
pub const UPDATE_VALIDATION_MESSAGE: &str = "Invalid customer data";

/// Identifier of a stored customer.
///
/// Ids are assigned by the store and are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// First id handed out by a fresh store.
    pub const FIRST: CustomerId = CustomerId(1);

    /// Wrap a raw id. Returns `None` for negative values.
    pub fn new(value: i64) -> Option<Self> {
        (value >= 0).then_some(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CustomerId {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<i64>()
            .ok()
            .and_then(CustomerId::new)
            .ok_or(AppError::InvalidId)
    }
}

/// A customer record from the `customers` table.
///
/// # JSON Example
///
/// ```json
/// { "id": 1, "name": "John", "age": 30 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Store-assigned identifier, immutable after insert
    pub id: CustomerId,

    pub name: String,

    pub age: i32,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for Customer {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let raw_id: i64 = row.try_get("id")?;
        let id = CustomerId::new(raw_id).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: format!("negative customer id {raw_id}").into(),
        })?;

        Ok(Self {
            id,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
        })
    }
}

/// Customer fields ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub age: i32,
}

/// Request body for `POST /customers`.
///
/// Missing fields default to `""` and `0`, which then fail validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub age: i32,
}

impl CreateCustomerRequest {
    /// Check the create rules: non-empty name and strictly positive age.
    pub fn validate(self) -> Result<NewCustomer, AppError> {
        if self.name.is_empty() || self.age <= 0 {
            return Err(AppError::Validation(CREATE_VALIDATION_MESSAGE));
        }

        Ok(NewCustomer {
            name: self.name,
            age: self.age,
        })
    }
}

/// Request body for `PUT /customers/{id}`.
///
/// The body is applied onto the stored record: omitted fields keep their
/// current value. Any `id` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,

    pub age: Option<i32>,
}

impl UpdateCustomerRequest {
    /// Merge this request into `existing` and check the update rules:
    /// non-empty name and non-negative age.
    pub fn apply_to(self, existing: Customer) -> Result<Customer, AppError> {
        let updated = Customer {
            id: existing.id,
            name: self.name.unwrap_or(existing.name),
            age: self.age.unwrap_or(existing.age),
        };

        if updated.name.is_empty() || updated.age < 0 {
            return Err(AppError::Validation(UPDATE_VALIDATION_MESSAGE));
        }

        Ok(updated)
    }
}

/// Deserialize a JSON request body, mapping failures to a 400 response that
/// carries the parser's message.
pub fn parse_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|err| AppError::MalformedBody(err.to_string()))
}
