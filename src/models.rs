//! View models returned by the data-access layer.
//!
//! These shapes mirror what the dashboard pages render: joined invoice and
//! customer fields, pre-formatted currency strings for list display, and the
//! raw-ish form shape used when editing a single invoice. Rows read straight
//! from a query derive [`FromQueryResult`]; everything else is assembled in
//! the `core` functions.

use crate::entities::InvoiceStatus;
use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::Date;
use serde::{Deserialize, Serialize};

/// One entry in the "latest invoices" card, amount already formatted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestInvoice {
    /// Invoice id
    pub id: String,
    /// Customer display name
    pub name: String,
    /// Customer avatar path
    pub image_url: String,
    /// Customer email
    pub email: String,
    /// Formatted amount, e.g. `"$250.00"`
    pub amount: String,
}

/// Raw joined row behind [`LatestInvoice`], amount still in cents.
#[derive(Debug, FromQueryResult)]
pub(crate) struct LatestInvoiceRow {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: i64,
}

/// One row of the filtered invoices table: invoice fields joined with the
/// customer's display fields. Amount stays in cents; the page formats it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct InvoiceRow {
    /// Invoice id
    pub id: String,
    /// Amount in integer cents
    pub amount: i64,
    /// Issue date
    pub date: Date,
    /// Payment status
    pub status: InvoiceStatus,
    /// Customer display name
    pub name: String,
    /// Customer email
    pub email: String,
    /// Customer avatar path
    pub image_url: String,
}

/// Shape consumed by the invoice edit form. Unlike list rows, the amount is
/// converted to major units (cents / 100) rather than formatted as a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceForm {
    /// Invoice id
    pub id: String,
    /// Customer the invoice belongs to
    pub customer_id: String,
    /// Amount in major currency units
    pub amount: f64,
    /// Payment status
    pub status: InvoiceStatus,
}

/// Aggregates backing the four dashboard summary cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    /// Total number of customers
    pub number_of_customers: u64,
    /// Total number of invoices, regardless of status
    pub number_of_invoices: u64,
    /// Formatted sum of all paid invoice amounts
    pub total_paid_invoices: String,
    /// Formatted sum of all pending invoice amounts
    pub total_pending_invoices: String,
}

/// Minimal customer shape for selection dropdowns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct CustomerField {
    /// Customer id
    pub id: String,
    /// Customer display name
    pub name: String,
}

/// One row of the customers table with per-customer invoice aggregates,
/// pending/paid totals already formatted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    /// Customer id
    pub id: String,
    /// Customer display name
    pub name: String,
    /// Customer email
    pub email: String,
    /// Customer avatar path
    pub image_url: String,
    /// Number of invoices issued to this customer
    pub total_invoices: i64,
    /// Formatted sum of this customer's pending invoices
    pub total_pending: String,
    /// Formatted sum of this customer's paid invoices
    pub total_paid: String,
}

/// Raw grouped row behind [`CustomerRow`]; sums are `None` for customers
/// with no invoices (LEFT JOIN produces no rows to aggregate).
#[derive(Debug, FromQueryResult)]
pub(crate) struct CustomerAggregateRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: Option<i64>,
    pub total_paid: Option<i64>,
}
