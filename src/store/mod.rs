//! Customer persistence.
//!
//! Handlers only see the [`CustomerStore`] trait; the concrete store is
//! chosen at startup and injected through [`crate::AppState`].

use async_trait::async_trait;

use crate::models::customer::{Customer, CustomerId, NewCustomer};

/// In-memory store for tests and local development
pub mod memory;
/// PostgreSQL store backed by sqlx
pub mod postgres;

pub use memory::InMemoryCustomerStore;
pub use postgres::PgCustomerStore;

/// Errors raised by a [`CustomerStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// `save` targeted an id with no stored row.
    #[error("no customer with id {0}")]
    NotFound(CustomerId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The four persistence operations the customer handlers rely on.
///
/// # Thread Safety
///
/// Implementations are shared across concurrent requests and must be
/// `Send + Sync`.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a new customer and return it with its assigned id.
    async fn insert(&self, customer: NewCustomer) -> StoreResult<Customer>;

    async fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>>;

    /// Overwrite the stored name and age of `customer.id`.
    ///
    /// Fails with [`StoreError::NotFound`] if the row no longer exists.
    async fn save(&self, customer: &Customer) -> StoreResult<Customer>;

    /// Hard-delete a customer. Returns `false` if no row had that id.
    async fn delete_by_id(&self, id: CustomerId) -> StoreResult<bool>;

    /// Cheap connectivity probe used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}
