//! Data-access layer - the named queries behind the dashboard pages.
//!
//! Every function takes a [`crate::datasource::DataSource`] and either runs
//! a real query or answers from the fixed mock payloads. Failures of a live
//! store are returned as errors, never masked with fallback data.

pub mod cards;
pub mod customers;
pub mod invoices;
pub mod revenue;

pub use cards::fetch_card_data;
pub use customers::{fetch_customers, fetch_filtered_customers};
pub use invoices::{
    ITEMS_PER_PAGE, fetch_filtered_invoices, fetch_invoice_by_id, fetch_invoices_pages,
    fetch_latest_invoices,
};
pub use revenue::fetch_revenue;

use crate::entities::{Invoice, InvoiceStatus, invoice};
use sea_orm::ColumnTrait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};

/// `SUM(CASE WHEN status = ? THEN amount ELSE 0 END)` over the invoices
/// table, used by both the summary cards and the customer aggregates.
pub(crate) fn status_sum(status: InvoiceStatus) -> SimpleExpr {
    Func::sum(
        Expr::case(
            invoice::Column::Status.eq(status),
            Expr::col((Invoice, invoice::Column::Amount)),
        )
        .finally(0),
    )
    .into()
}
