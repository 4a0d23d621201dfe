//! One-shot dashboard summary: wires configuration, the data source and the
//! query layer, then logs what the dashboard overview page would render.

use dotenvy::dotenv;
use ledgerboard::config::database;
use ledgerboard::core::{
    fetch_card_data, fetch_filtered_invoices, fetch_invoices_pages, fetch_latest_invoices,
    fetch_revenue,
};
use ledgerboard::datasource::DataSource;
use ledgerboard::errors::Result;
use ledgerboard::format::{format_currency, format_date_to_local, generate_y_axis};
use ledgerboard::seed::seed_demo_data;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Env vars can also be set externally, so a missing .env is fine
    dotenv().ok();

    let source = DataSource::from_env().await?;
    if let DataSource::Live(db) = &source {
        database::create_tables(db).await?;
        seed_demo_data(db).await?;
    }

    // The overview page fires its independent fetches concurrently
    let (cards, revenue, latest) = tokio::try_join!(
        fetch_card_data(&source),
        fetch_revenue(&source),
        fetch_latest_invoices(&source),
    )?;

    info!(
        "Cards: {} customers, {} invoices, {} collected, {} pending",
        cards.number_of_customers,
        cards.number_of_invoices,
        cards.total_paid_invoices,
        cards.total_pending_invoices
    );

    let (_labels, top_label) = generate_y_axis(&revenue);
    info!(
        "Revenue chart: {} months, y-axis up to {}",
        revenue.len(),
        format_currency(top_label * 100)
    );

    for entry in &latest {
        info!("Latest: {} <{}> {}", entry.name, entry.email, entry.amount);
    }

    let pages = fetch_invoices_pages(&source, "").await?;
    let first_page = fetch_filtered_invoices(&source, "", 1).await?;
    info!("Invoices table: {pages} page(s)");
    for row in &first_page {
        info!(
            "Invoice {}: {} on {} ({:?})",
            row.id,
            format_currency(row.amount),
            format_date_to_local(row.date),
            row.status
        );
    }

    Ok(())
}
