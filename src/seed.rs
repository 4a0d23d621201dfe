//! Demo data seeding for live stores.
//!
//! Populates an empty database with the same data set mock mode serves, so a
//! freshly created store renders a non-empty dashboard. Seeding is skipped
//! when any customers already exist.

use crate::entities::{Customer, Invoice, Revenue, customer, invoice, revenue};
use crate::errors::Result;
use crate::mock;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait};
use tracing::{debug, info};

/// Inserts the demo customers, invoices and revenue series into an empty
/// database. A no-op when data is already present.
///
/// # Errors
/// Returns `Error::Database` when any insert fails.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<()> {
    let existing = Customer::find().count(db).await?;
    if existing > 0 {
        debug!("Database already has {existing} customers, skipping demo seed");
        return Ok(());
    }

    let customers: Vec<customer::ActiveModel> = mock::customers()
        .into_iter()
        .map(IntoActiveModel::into_active_model)
        .collect();
    Customer::insert_many(customers).exec(db).await?;

    let invoices: Vec<invoice::ActiveModel> = mock::invoices()
        .into_iter()
        .map(IntoActiveModel::into_active_model)
        .collect();
    Invoice::insert_many(invoices).exec(db).await?;

    let months: Vec<revenue::ActiveModel> = mock::revenue()
        .into_iter()
        .map(IntoActiveModel::into_active_model)
        .collect();
    Revenue::insert_many(months).exec(db).await?;

    info!("Seeded demo customers, invoices and revenue");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_seed_populates_empty_database() -> Result<()> {
        let db = setup_test_db().await?;
        seed_demo_data(&db).await?;

        assert_eq!(Customer::find().count(&db).await?, 5);
        assert_eq!(Invoice::find().count(&db).await?, 5);
        assert_eq!(Revenue::find().count(&db).await?, 12);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        seed_demo_data(&db).await?;
        seed_demo_data(&db).await?;

        assert_eq!(Invoice::find().count(&db).await?, 5);
        Ok(())
    }
}
