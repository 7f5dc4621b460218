//! Customer API
//!
//! A REST service that creates, reads, updates and deletes customer records
//! (name, age) in a relational store.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the [`store::CustomerStore`] trait
//! - **Format**: JSON requests/responses, errors as `{"error": "..."}`

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{customers, fallback, health},
    store::CustomerStore,
};

/// State shared with every handler.
///
/// The store is injected here at startup; handlers never reach for a
/// global connection.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerStore>,
}

impl AppState {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }
}

/// Build the HTTP router.
///
/// # Routes
///
/// | Method | Path              | Handler           |
/// |--------|-------------------|-------------------|
/// | POST   | `/customers`      | `create_customer` |
/// | GET    | `/customers/{id}` | `get_customer`    |
/// | PUT    | `/customers/{id}` | `update_customer` |
/// | DELETE | `/customers/{id}` | `delete_customer` |
/// | GET    | `/health`         | `health_check`    |
///
/// A known path with an unregistered method answers 405; an unknown path
/// answers 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::health_check).fallback(fallback::method_not_allowed),
        )
        .route(
            "/customers",
            post(customers::create_customer).fallback(fallback::method_not_allowed),
        )
        .route(
            "/customers/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer)
                .fallback(fallback::method_not_allowed),
        )
        .fallback(fallback::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
