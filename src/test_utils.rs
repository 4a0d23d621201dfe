//! Shared test utilities for the dashboard data layer.
//!
//! Provides the standard in-memory database setup plus helpers for creating
//! test customers and invoices with explicit values.

use crate::config::database::create_tables;
use crate::datasource::DataSource;
use crate::entities::{InvoiceStatus, customer, invoice};
use crate::errors::{Error, Result};
use crate::seed;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates an in-memory database pre-populated with the demo data set and
/// wraps it as a live [`DataSource`].
pub async fn seeded_source() -> Result<DataSource> {
    let db = setup_test_db().await?;
    seed::seed_demo_data(&db).await?;
    Ok(DataSource::Live(db))
}

/// Inserts a customer with a derived avatar path.
pub async fn create_test_customer(
    db: &DatabaseConnection,
    id: &str,
    name: &str,
    email: &str,
) -> Result<customer::Model> {
    let model = customer::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        image_url: Set(format!("/customers/{id}.png")),
    };
    model.insert(db).await.map_err(Into::into)
}

/// Inserts an invoice; `date` is an ISO date string like `"2024-03-01"`.
pub async fn create_test_invoice(
    db: &DatabaseConnection,
    id: &str,
    customer_id: &str,
    amount: i64,
    date: &str,
    status: InvoiceStatus,
) -> Result<invoice::Model> {
    let date: NaiveDate = date.parse().map_err(|_| Error::Config {
        message: format!("invalid test date: {date}"),
    })?;
    let model = invoice::ActiveModel {
        id: Set(id.to_string()),
        customer_id: Set(customer_id.to_string()),
        amount: Set(amount),
        date: Set(date),
        status: Set(status),
    };
    model.insert(db).await.map_err(Into::into)
}
