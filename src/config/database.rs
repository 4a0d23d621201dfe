//! Database configuration for the dashboard data layer.
//!
//! Reads the connection URL from the environment, decides whether the
//! process runs against a live store or mock data, and creates the schema
//! from the entity definitions using `SeaORM`'s
//! `Schema::create_table_from_entity`, so no hand-written SQL is needed.

use crate::entities::{Customer, Invoice, Revenue};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Environment variable holding the store connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Placeholder value that tutorial `.env` files ship with; treated the same
/// as an unset variable.
const PLACEHOLDER_URL: &str = "postgres://...";

/// Reads the configured connection URL, if any.
///
/// Returns `None` when the variable is unset, empty, or still carries the
/// placeholder value, which selects mock mode.
#[must_use]
pub fn database_url() -> Option<String> {
    std::env::var(DATABASE_URL_VAR)
        .ok()
        .filter(|url| is_configured(url))
}

/// Whether a URL value actually points at a store.
#[must_use]
pub fn is_configured(url: &str) -> bool {
    !url.is_empty() && url != PLACEHOLDER_URL
}

/// Opens a connection to the given database URL.
///
/// # Errors
/// Returns `Error::Database` when the connection cannot be established.
pub async fn connect(url: &str) -> Result<DatabaseConnection> {
    Database::connect(url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
///
/// Uses `SeaORM`'s schema generation so the database layout always matches
/// the Rust structs. Statements carry `IF NOT EXISTS`, so calling this on an
/// already-initialized store is a no-op.
///
/// # Errors
/// Returns `Error::Database` when a table cannot be created.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut customer_table = schema.create_table_from_entity(Customer);
    let mut invoice_table = schema.create_table_from_entity(Invoice);
    let mut revenue_table = schema.create_table_from_entity(Revenue);

    db.execute(builder.build(customer_table.if_not_exists()))
        .await?;
    db.execute(builder.build(invoice_table.if_not_exists()))
        .await?;
    db.execute(builder.build(revenue_table.if_not_exists()))
        .await?;

    Ok(())
}
