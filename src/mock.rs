//! Fixed mock payloads served when no store is configured.
//!
//! The values are the demo data set of the original dashboard and are shared
//! with [`crate::seed`], so a freshly seeded live store and mock mode show
//! the same content. Payloads here are plain constructors; filtering and
//! pagination over them happen in the `core` functions.

use crate::entities::{InvoiceStatus, customer, invoice, revenue};
use crate::models::{CardData, CustomerField, CustomerRow, LatestInvoice};
use chrono::NaiveDate;

/// Fixed 12-month revenue series, January through December.
#[must_use]
pub fn revenue() -> Vec<revenue::Model> {
    let series = [
        ("Jan", 2000),
        ("Feb", 1800),
        ("Mar", 2200),
        ("Apr", 2500),
        ("May", 2300),
        ("Jun", 3200),
        ("Jul", 3500),
        ("Aug", 3700),
        ("Sep", 2500),
        ("Oct", 2800),
        ("Nov", 3000),
        ("Dec", 4800),
    ];
    series
        .into_iter()
        .map(|(month, revenue)| revenue::Model {
            month: month.to_string(),
            revenue,
        })
        .collect()
}

/// The five demo customers.
#[must_use]
pub fn customers() -> Vec<customer::Model> {
    let rows = [
        ("1", "Delba de Oliveira", "delba@example.com", "/customers/delba-de-oliveira.png"),
        ("2", "Lee Robinson", "lee@example.com", "/customers/lee-robinson.png"),
        ("3", "Amy Burns", "amy@example.com", "/customers/amy-burns.png"),
        ("4", "Balazs Orban", "balazs@example.com", "/customers/balazs-orban.png"),
        ("5", "Michael Novotny", "michael@example.com", "/customers/michael-novotny.png"),
    ];
    rows.into_iter()
        .map(|(id, name, email, image_url)| customer::Model {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image_url: image_url.to_string(),
        })
        .collect()
}

/// The five demo invoices, one per customer, newest first.
#[must_use]
pub fn invoices() -> Vec<invoice::Model> {
    let rows = [
        ("1", "1", 25000, (2023, 12, 1), InvoiceStatus::Pending),
        ("2", "2", 66600, (2023, 11, 15), InvoiceStatus::Paid),
        ("3", "3", 50000, (2023, 11, 10), InvoiceStatus::Pending),
        ("4", "4", 33300, (2023, 10, 20), InvoiceStatus::Paid),
        ("5", "5", 16900, (2023, 10, 15), InvoiceStatus::Pending),
    ];
    rows.into_iter()
        .map(|(id, customer_id, amount, (y, m, d), status)| {
            // The literals above are all valid calendar dates.
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
            invoice::Model {
                id: id.to_string(),
                customer_id: customer_id.to_string(),
                amount,
                date,
                status,
            }
        })
        .collect()
}

/// The "latest invoices" card content, amounts pre-formatted.
#[must_use]
pub fn latest_invoices() -> Vec<LatestInvoice> {
    let rows = [
        ("1", "$250.00", "Delba de Oliveira", "/customers/delba-de-oliveira.png", "delba@example.com"),
        ("2", "$666.00", "Lee Robinson", "/customers/lee-robinson.png", "lee@example.com"),
        ("3", "$500.00", "Amy Burns", "/customers/amy-burns.png", "amy@example.com"),
        ("4", "$333.00", "Balazs Orban", "/customers/balazs-orban.png", "balazs@example.com"),
        ("5", "$169.00", "Michael Novotny", "/customers/michael-novotny.png", "michael@example.com"),
    ];
    rows.into_iter()
        .map(|(id, amount, name, image_url, email)| LatestInvoice {
            id: id.to_string(),
            amount: amount.to_string(),
            name: name.to_string(),
            image_url: image_url.to_string(),
            email: email.to_string(),
        })
        .collect()
}

/// Fixed aggregates for the dashboard summary cards.
#[must_use]
pub fn card_data() -> CardData {
    CardData {
        number_of_customers: 12,
        number_of_invoices: 6,
        total_paid_invoices: "$2,000.00".to_string(),
        total_pending_invoices: "$500.00".to_string(),
    }
}

/// Dropdown fields for the demo customers, name ascending.
#[must_use]
pub fn customer_fields() -> Vec<CustomerField> {
    let mut fields: Vec<CustomerField> = customers()
        .into_iter()
        .map(|c| CustomerField {
            id: c.id,
            name: c.name,
        })
        .collect();
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    fields
}

/// Customers-table rows with fixed invoice aggregates.
#[must_use]
pub fn customer_rows() -> Vec<CustomerRow> {
    let rows = [
        (
            "1",
            "Delba de Oliveira",
            "delba@example.com",
            "/customers/delba-de-oliveira.png",
            3,
            "$250.00",
            "$500.00",
        ),
        (
            "2",
            "Lee Robinson",
            "lee@example.com",
            "/customers/lee-robinson.png",
            2,
            "$666.00",
            "$333.00",
        ),
        (
            "3",
            "Amy Burns",
            "amy@example.com",
            "/customers/amy-burns.png",
            1,
            "$500.00",
            "$0.00",
        ),
    ];
    rows.into_iter()
        .map(
            |(id, name, email, image_url, total_invoices, total_pending, total_paid)| CustomerRow {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                image_url: image_url.to_string(),
                total_invoices,
                total_pending: total_pending.to_string(),
                total_paid: total_paid.to_string(),
            },
        )
        .collect()
}
