//! Aggregates for the dashboard summary cards.

use crate::core::status_sum;
use crate::datasource::DataSource;
use crate::entities::{Customer, Invoice, InvoiceStatus};
use crate::errors::Result;
use crate::format::format_currency;
use crate::mock;
use crate::models::CardData;
use sea_orm::{EntityTrait, FromQueryResult, PaginatorTrait, QuerySelect};
use tracing::{debug, instrument};

#[derive(Debug, FromQueryResult)]
struct StatusTotals {
    paid: Option<i64>,
    pending: Option<i64>,
}

/// Fetches the four summary-card aggregates: customer count, invoice count
/// (regardless of status) and the formatted paid/pending totals.
///
/// The three live sub-queries are dispatched concurrently and joined before
/// the result is assembled; a failure of any one fails the whole call.
///
/// # Errors
/// Returns `Error::Database` when any of the live queries fails.
#[instrument(skip(source))]
pub async fn fetch_card_data(source: &DataSource) -> Result<CardData> {
    match source {
        DataSource::Mock => {
            debug!("Serving mock card data");
            Ok(mock::card_data())
        }
        DataSource::Live(db) => {
            let totals_query = Invoice::find()
                .select_only()
                .expr_as(status_sum(InvoiceStatus::Paid), "paid")
                .expr_as(status_sum(InvoiceStatus::Pending), "pending")
                .into_model::<StatusTotals>()
                .one(db);

            let (number_of_invoices, number_of_customers, totals) = tokio::try_join!(
                Invoice::find().count(db),
                Customer::find().count(db),
                totals_query,
            )?;

            let totals = totals.unwrap_or(StatusTotals {
                paid: None,
                pending: None,
            });

            Ok(CardData {
                number_of_customers,
                number_of_invoices,
                total_paid_invoices: format_currency(totals.paid.unwrap_or(0)),
                total_pending_invoices: format_currency(totals.pending.unwrap_or(0)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_customer, create_test_invoice, seeded_source, setup_test_db};

    #[tokio::test]
    async fn test_card_data_seeded_counts_and_totals() -> Result<()> {
        let source = seeded_source().await?;
        let cards = fetch_card_data(&source).await?;

        assert_eq!(cards.number_of_customers, 5);
        // Invoice count ignores status
        assert_eq!(cards.number_of_invoices, 5);
        // Paid: 66600 + 33300, pending: 25000 + 50000 + 16900
        assert_eq!(cards.total_paid_invoices, "$999.00");
        assert_eq!(cards.total_pending_invoices, "$919.00");
        Ok(())
    }

    #[tokio::test]
    async fn test_card_data_empty_database_is_all_zero() -> Result<()> {
        let db = setup_test_db().await?;
        let cards = fetch_card_data(&DataSource::Live(db)).await?;

        assert_eq!(cards.number_of_customers, 0);
        assert_eq!(cards.number_of_invoices, 0);
        assert_eq!(cards.total_paid_invoices, "$0.00");
        assert_eq!(cards.total_pending_invoices, "$0.00");
        Ok(())
    }

    #[tokio::test]
    async fn test_card_data_mock_fixed_aggregates() -> Result<()> {
        let cards = fetch_card_data(&DataSource::Mock).await?;

        assert_eq!(cards.number_of_customers, 12);
        assert_eq!(cards.number_of_invoices, 6);
        assert_eq!(cards.total_paid_invoices, "$2,000.00");
        assert_eq!(cards.total_pending_invoices, "$500.00");
        Ok(())
    }

    #[tokio::test]
    async fn test_card_data_grouping_in_totals() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_customer(&db, "c1", "Grace Hopper", "grace@example.com").await?;
        create_test_invoice(
            &db,
            "i1",
            "c1",
            200_000,
            "2024-02-01",
            crate::entities::InvoiceStatus::Paid,
        )
        .await?;
        let cards = fetch_card_data(&DataSource::Live(db)).await?;

        assert_eq!(cards.total_paid_invoices, "$2,000.00");
        Ok(())
    }
}
