//! Database bootstrap tool.
//!
//! Runs migrations against `DATABASE_URL` and inserts a few sample
//! customers so a fresh database has something to serve.

use customer_api::{
    config::Config,
    db,
    models::customer::NewCustomer,
    store::{CustomerStore, PgCustomerStore},
};
use tracing_subscriber::EnvFilter;

const SAMPLE_CUSTOMERS: [(&str, i32); 3] = [("John Doe", 30), ("Jane Doe", 25), ("Mike Smith", 35)];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let store = PgCustomerStore::new(pool);
    for (name, age) in SAMPLE_CUSTOMERS {
        let customer = store
            .insert(NewCustomer {
                name: name.to_string(),
                age,
            })
            .await?;
        tracing::info!(id = %customer.id, name = %customer.name, "Seeded customer");
    }

    Ok(())
}
