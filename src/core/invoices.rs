//! Invoice queries: latest-invoices card, the filtered/paginated invoices
//! table, page counts and single-invoice lookup for the edit form.

use crate::datasource::DataSource;
use crate::entities::{Invoice, customer, invoice};
use crate::errors::{Error, Result};
use crate::format::format_currency;
use crate::mock;
use crate::models::{InvoiceForm, InvoiceRow, LatestInvoice, LatestInvoiceRow};
use sea_orm::sea_query::{Alias, Expr, Func};
use sea_orm::{
    ActiveEnum, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Fixed page size of the invoices table.
pub const ITEMS_PER_PAGE: u64 = 6;

/// Number of entries in the latest-invoices card.
const LATEST_INVOICE_COUNT: u64 = 5;

/// Fetches the five most recent invoices joined with customer display
/// fields, amounts pre-formatted for the card.
///
/// # Errors
/// Returns `Error::Database` when the live query fails.
#[instrument(skip(source))]
pub async fn fetch_latest_invoices(source: &DataSource) -> Result<Vec<LatestInvoice>> {
    match source {
        DataSource::Mock => {
            debug!("Serving mock latest invoices");
            Ok(mock::latest_invoices())
        }
        DataSource::Live(db) => {
            let rows = Invoice::find()
                .select_only()
                .columns([invoice::Column::Id, invoice::Column::Amount])
                .column_as(customer::Column::Name, "name")
                .column_as(customer::Column::Email, "email")
                .column_as(customer::Column::ImageUrl, "image_url")
                .join(JoinType::InnerJoin, invoice::Relation::Customer.def())
                .order_by_desc(invoice::Column::Date)
                .limit(LATEST_INVOICE_COUNT)
                .into_model::<LatestInvoiceRow>()
                .all(db)
                .await?;

            Ok(rows
                .into_iter()
                .map(|row| LatestInvoice {
                    id: row.id,
                    name: row.name,
                    image_url: row.image_url,
                    email: row.email,
                    amount: format_currency(row.amount),
                })
                .collect())
        }
    }
}

/// Fetches one page of the invoices table, filtered by a case-insensitive
/// substring match and ordered by descending date.
///
/// The match runs against customer name, customer email, and the invoice
/// amount, date and status rendered as text. Pages are 1-based and hold
/// [`ITEMS_PER_PAGE`] rows.
///
/// # Errors
/// Returns `Error::InvalidPage` for page 0 and `Error::Database` when the
/// live query fails.
#[instrument(skip(source))]
pub async fn fetch_filtered_invoices(
    source: &DataSource,
    query: &str,
    page: u64,
) -> Result<Vec<InvoiceRow>> {
    let offset = page_offset(page)?;

    match source {
        DataSource::Mock => {
            let needle = query.to_lowercase();
            let mut rows: Vec<InvoiceRow> = mock_invoice_rows()
                .into_iter()
                .filter(|row| row_matches(row, &needle))
                .collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date));

            Ok(rows
                .into_iter()
                .skip(offset as usize)
                .take(ITEMS_PER_PAGE as usize)
                .collect())
        }
        DataSource::Live(db) => Invoice::find()
            .select_only()
            .columns([
                invoice::Column::Id,
                invoice::Column::Amount,
                invoice::Column::Date,
                invoice::Column::Status,
            ])
            .column_as(customer::Column::Name, "name")
            .column_as(customer::Column::Email, "email")
            .column_as(customer::Column::ImageUrl, "image_url")
            .join(JoinType::InnerJoin, invoice::Relation::Customer.def())
            .filter(invoice_filter(query))
            .order_by_desc(invoice::Column::Date)
            .limit(ITEMS_PER_PAGE)
            .offset(offset)
            .into_model::<InvoiceRow>()
            .all(db)
            .await
            .map_err(Into::into),
    }
}

/// Returns the number of pages the filtered invoices table spans,
/// `ceil(matching rows / ITEMS_PER_PAGE)`. Mock mode reports at least one
/// page so pagination controls always render.
///
/// # Errors
/// Returns `Error::Database` when the live query fails.
#[instrument(skip(source))]
pub async fn fetch_invoices_pages(source: &DataSource, query: &str) -> Result<u64> {
    match source {
        DataSource::Mock => {
            let needle = query.to_lowercase();
            let matching = mock_invoice_rows()
                .iter()
                .filter(|row| row_matches(row, &needle))
                .count() as u64;
            Ok(matching.div_ceil(ITEMS_PER_PAGE).max(1))
        }
        DataSource::Live(db) => {
            let matching = Invoice::find()
                .join(JoinType::InnerJoin, invoice::Relation::Customer.def())
                .filter(invoice_filter(query))
                .count(db)
                .await?;
            Ok(matching.div_ceil(ITEMS_PER_PAGE))
        }
    }
}

/// Fetches a single invoice by id for the edit form, converting the stored
/// cent amount to major units (divide by 100, not currency-formatted).
///
/// # Errors
/// Returns `Error::InvoiceNotFound` when no invoice has the given id, in
/// both live and mock mode, and `Error::Database` when the live query fails.
#[instrument(skip(source))]
pub async fn fetch_invoice_by_id(source: &DataSource, id: &str) -> Result<InvoiceForm> {
    let found = match source {
        DataSource::Mock => mock::invoices().into_iter().find(|inv| inv.id == id),
        DataSource::Live(db) => Invoice::find_by_id(id.to_owned()).one(db).await?,
    };

    found
        .map(form_from_model)
        .ok_or_else(|| Error::InvoiceNotFound { id: id.to_string() })
}

fn form_from_model(model: invoice::Model) -> InvoiceForm {
    InvoiceForm {
        id: model.id,
        customer_id: model.customer_id,
        amount: model.amount as f64 / 100.0,
        status: model.status,
    }
}

fn page_offset(page: u64) -> Result<u64> {
    if page == 0 {
        return Err(Error::InvalidPage { page });
    }
    Ok((page - 1) * ITEMS_PER_PAGE)
}

/// The shared filter predicate of the invoices table: a case-insensitive
/// substring match on customer name/email or the invoice amount, date or
/// status cast to text. Bound positionally, so arbitrary search input is
/// safe by construction.
fn invoice_filter(query: &str) -> Condition {
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
        .add(
            Expr::col((invoice::Entity, invoice::Column::Amount))
                .cast_as(Alias::new("text"))
                .like(pattern.as_str()),
        )
        .add(
            Expr::col((invoice::Entity, invoice::Column::Date))
                .cast_as(Alias::new("text"))
                .like(pattern.as_str()),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((
                invoice::Entity,
                invoice::Column::Status,
            ))))
            .like(pattern.as_str()),
        )
}

/// The mock invoice list joined with its customers, mirroring what the live
/// join produces.
fn mock_invoice_rows() -> Vec<InvoiceRow> {
    let customers: HashMap<String, customer::Model> = mock::customers()
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect();

    mock::invoices()
        .into_iter()
        .filter_map(|inv| {
            customers.get(&inv.customer_id).map(|c| InvoiceRow {
                id: inv.id,
                amount: inv.amount,
                date: inv.date,
                status: inv.status,
                name: c.name.clone(),
                email: c.email.clone(),
                image_url: c.image_url.clone(),
            })
        })
        .collect()
}

/// In-memory version of [`invoice_filter`]; `needle` must be lowercased.
fn row_matches(row: &InvoiceRow, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle)
        || row.email.to_lowercase().contains(needle)
        || row.amount.to_string().contains(needle)
        || row.date.to_string().contains(needle)
        || row.status.to_value().contains(needle)
}
