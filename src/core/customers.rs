//! Customer queries: dropdown fields and the customers table with
//! per-customer invoice aggregates.

use crate::core::status_sum;
use crate::datasource::DataSource;
use crate::entities::{Customer, Invoice, InvoiceStatus, customer, invoice};
use crate::errors::Result;
use crate::format::format_currency;
use crate::mock;
use crate::models::{CustomerAggregateRow, CustomerField, CustomerRow};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    Condition, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use tracing::{debug, instrument};

/// Fetches all customers as id/name pairs for selection dropdowns, name
/// ascending.
///
/// # Errors
/// Returns `Error::Database` when the live query fails.
#[instrument(skip(source))]
pub async fn fetch_customers(source: &DataSource) -> Result<Vec<CustomerField>> {
    match source {
        DataSource::Mock => {
            debug!("Serving mock customer fields");
            Ok(mock::customer_fields())
        }
        DataSource::Live(db) => Customer::find()
            .select_only()
            .columns([customer::Column::Id, customer::Column::Name])
            .order_by_asc(customer::Column::Name)
            .into_model::<CustomerField>()
            .all(db)
            .await
            .map_err(Into::into),
    }
}

/// Fetches the customers table: each customer with invoice count and
/// formatted pending/paid totals, filtered by a case-insensitive substring
/// match on name or email, name ascending.
///
/// # Errors
/// Returns `Error::Database` when the live query fails.
#[instrument(skip(source))]
pub async fn fetch_filtered_customers(
    source: &DataSource,
    query: &str,
) -> Result<Vec<CustomerRow>> {
    match source {
        DataSource::Mock => {
            let needle = query.to_lowercase();
            Ok(mock::customer_rows()
                .into_iter()
                .filter(|row| {
                    row.name.to_lowercase().contains(&needle)
                        || row.email.to_lowercase().contains(&needle)
                })
                .collect())
        }
        DataSource::Live(db) => {
            let rows = Customer::find()
                .select_only()
                .columns([
                    customer::Column::Id,
                    customer::Column::Name,
                    customer::Column::Email,
                    customer::Column::ImageUrl,
                ])
                .expr_as(
                    Func::count(Expr::col((Invoice, invoice::Column::Id))),
                    "total_invoices",
                )
                .expr_as(status_sum(InvoiceStatus::Pending), "total_pending")
                .expr_as(status_sum(InvoiceStatus::Paid), "total_paid")
                .join(JoinType::LeftJoin, customer::Relation::Invoices.def())
                .filter(customer_filter(query))
                .group_by(customer::Column::Id)
                .group_by(customer::Column::Name)
                .group_by(customer::Column::Email)
                .group_by(customer::Column::ImageUrl)
                .order_by_asc(customer::Column::Name)
                .into_model::<CustomerAggregateRow>()
                .all(db)
                .await?;

            Ok(rows
                .into_iter()
                .map(|row| CustomerRow {
                    id: row.id,
                    name: row.name,
                    email: row.email,
                    image_url: row.image_url,
                    total_invoices: row.total_invoices,
                    total_pending: format_currency(row.total_pending.unwrap_or(0)),
                    total_paid: format_currency(row.total_paid.unwrap_or(0)),
                })
                .collect())
        }
    }
}

/// Case-insensitive substring match on customer name or email.
fn customer_filter(query: &str) -> Condition {
    let pattern = format!("%{}%", query.to_lowercase());
    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col((
                customer::Entity,
                customer::Column::Name,
            ))))
            .like(pattern.as_str()),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((
                customer::Entity,
                customer::Column::Email,
            ))))
            .like(pattern.as_str()),
        )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_customer, seeded_source, setup_test_db};

    #[tokio::test]
    async fn test_fetch_customers_name_ascending() -> Result<()> {
        let source = seeded_source().await?;
        let customers = fetch_customers(&source).await?;

        assert_eq!(customers.len(), 5);
        let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names[0], "Amy Burns");
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_customers_mock() -> Result<()> {
        let customers = fetch_customers(&DataSource::Mock).await?;

        assert_eq!(customers.len(), 5);
        assert_eq!(customers[0].name, "Amy Burns");
        Ok(())
    }

    #[tokio::test]
    async fn test_filtered_customers_aggregates() -> Result<()> {
        let source = seeded_source().await?;
        let rows = fetch_filtered_customers(&source, "delba").await?;

        assert_eq!(rows.len(), 1);
        let delba = &rows[0];
        assert_eq!(delba.name, "Delba de Oliveira");
        // One pending invoice of 25000 cents in the demo data
        assert_eq!(delba.total_invoices, 1);
        assert_eq!(delba.total_pending, "$250.00");
        assert_eq!(delba.total_paid, "$0.00");
        Ok(())
    }

    #[tokio::test]
    async fn test_filtered_customers_case_insensitive() -> Result<()> {
        let source = seeded_source().await?;

        let lower = fetch_filtered_customers(&source, "lee@").await?;
        let upper = fetch_filtered_customers(&source, "LEE@").await?;

        assert_eq!(lower.len(), 1);
        assert_eq!(lower, upper);
        Ok(())
    }

    #[tokio::test]
    async fn test_filtered_customers_without_invoices_have_zero_totals() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_customer(&db, "c1", "Grace Hopper", "grace@example.com").await?;
        let rows = fetch_filtered_customers(&DataSource::Live(db), "grace").await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_invoices, 0);
        assert_eq!(rows[0].total_pending, "$0.00");
        assert_eq!(rows[0].total_paid, "$0.00");
        Ok(())
    }

    #[tokio::test]
    async fn test_filtered_customers_mock() -> Result<()> {
        let all = fetch_filtered_customers(&DataSource::Mock, "").await?;
        assert_eq!(all.len(), 3);

        let amy = fetch_filtered_customers(&DataSource::Mock, "AMY").await?;
        assert_eq!(amy.len(), 1);
        assert_eq!(amy[0].total_paid, "$0.00");
        Ok(())
    }
}
