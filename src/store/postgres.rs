//! PostgreSQL implementation of [`CustomerStore`].
//!
//! Each operation is a single statement against the `customers` table.

use async_trait::async_trait;

use super::{CustomerStore, StoreError, StoreResult};
use crate::{
    db::DbPool,
    models::customer::{Customer, CustomerId, NewCustomer},
};

#[derive(Debug, Clone)]
pub struct PgCustomerStore {
    pool: DbPool,
}

impl PgCustomerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> StoreResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age
            "#,
        )
        .bind(customer.name)
        .bind(customer.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT id, name, age FROM customers WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await?;

        Ok(customer)
    }

    async fn save(&self, customer: &Customer) -> StoreResult<Customer> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $2,
                age = $3
            WHERE id = $1
            RETURNING id, name, age
            "#,
        )
        .bind(customer.id.value())
        .bind(&customer.name)
        .bind(customer.age)
        .fetch_optional(&self.pool)
        .await?
        // Row removed since it was read
        .ok_or(StoreError::NotFound(customer.id))
    }

    async fn delete_by_id(&self, id: CustomerId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
