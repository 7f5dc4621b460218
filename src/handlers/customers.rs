//! Customer HTTP handlers.
//!
//! This module implements the customer endpoints:
//! - POST /customers - Create a customer
//! - GET /customers/{id} - Get a customer by ID
//! - PUT /customers/{id} - Update a customer's name and age
//! - DELETE /customers/{id} - Delete a customer
//!
//! Bodies are taken as raw bytes and parsed inside the handler so that the
//! id and existence checks of update run before the body is looked at.

use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;

use crate::{
    AppState,
    error::AppError,
    handlers::extract::CustomerIdPath,
    models::customer::{
        CreateCustomerRequest, Customer, CustomerId, UpdateCustomerRequest, parse_body,
    },
    store::CustomerStore,
};

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Create a new customer.
///
/// # Request Body
///
/// ```json
/// { "name": "John", "age": 30 }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the stored customer, including its new id
/// - **Error (400)**: malformed JSON, empty name or non-positive age
/// - **Error (500)**: store failure
pub async fn create_customer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Customer>, AppError> {
    let request: CreateCustomerRequest =
        parse_body(&body).inspect_err(|err| tracing::warn!(%err, "Error binding JSON"))?;

    let new_customer = request
        .validate()
        .inspect_err(|err| tracing::warn!(%err, "Invalid customer data"))?;

    let customer = state
        .customers
        .insert(new_customer)
        .await
        .inspect_err(|err| tracing::error!(%err, "Error creating customer"))?;

    tracing::info!(id = %customer.id, "Customer created");
    Ok(Json(customer))
}

/// Get a customer by ID.
///
/// # Response
///
/// - **Success (200 OK)**: the customer
/// - **Error (400)**: id is not a non-negative integer
/// - **Error (404)**: no customer with that id
pub async fn get_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<Json<Customer>, AppError> {
    let customer = find_existing(state.customers.as_ref(), id).await?;

    Ok(Json(customer))
}

/// Update a customer's name and age.
///
/// Fields omitted from the body keep their stored values. Unlike create,
/// an age of zero is accepted.
///
/// # Response
///
/// - **Success (200 OK)**: the updated customer
/// - **Error (400)**: invalid id, malformed JSON, empty name or negative age
/// - **Error (404)**: no customer with that id
/// - **Error (500)**: store failure
pub async fn update_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
    body: Bytes,
) -> Result<Json<Customer>, AppError> {
    let existing = find_existing(state.customers.as_ref(), id).await?;

    let request: UpdateCustomerRequest =
        parse_body(&body).inspect_err(|err| tracing::warn!(%err, "Error binding JSON"))?;

    let updated = request
        .apply_to(existing)
        .inspect_err(|err| tracing::warn!(%id, %err, "Invalid customer data"))?;

    let customer = state
        .customers
        .save(&updated)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "Error updating customer"))?;

    tracing::info!(%id, "Customer updated");
    Ok(Json(customer))
}

/// Delete a customer.
///
/// # Response
///
/// - **Success (200 OK)**: `{"message": "Customer deleted"}`
/// - **Error (400)**: invalid id
/// - **Error (404)**: no customer with that id
/// - **Error (500)**: store failure
pub async fn delete_customer(
    State(state): State<AppState>,
    CustomerIdPath(id): CustomerIdPath,
) -> Result<Json<DeleteResponse>, AppError> {
    find_existing(state.customers.as_ref(), id).await?;

    let deleted = state
        .customers
        .delete_by_id(id)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "Error deleting customer"))?;

    // Removed by a concurrent request after the lookup
    if !deleted {
        return Err(AppError::CustomerNotFound);
    }

    tracing::info!(%id, "Customer deleted");
    Ok(Json(DeleteResponse {
        message: "Customer deleted",
    }))
}

async fn find_existing(store: &dyn CustomerStore, id: CustomerId) -> Result<Customer, AppError> {
    store
        .find_by_id(id)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "Error loading customer"))?
        .ok_or_else(|| {
            tracing::warn!(%id, "Customer not found");
            AppError::CustomerNotFound
        })
}
