//! Revenue queries for the dashboard chart.

use crate::datasource::DataSource;
use crate::entities::{Revenue, revenue};
use crate::errors::Result;
use crate::mock;
use sea_orm::EntityTrait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Simulated latency of the mock revenue fetch, kept from the original demo
/// so loading states stay visible.
const MOCK_FETCH_DELAY: Duration = Duration::from_millis(1000);

/// Fetches the 12-month revenue series, in stored order.
///
/// In mock mode the fixed January-December series is returned after a
/// simulated delay; no store I/O happens.
///
/// # Errors
/// Returns `Error::Database` when the live query fails.
#[instrument(skip(source))]
pub async fn fetch_revenue(source: &DataSource) -> Result<Vec<revenue::Model>> {
    match source {
        DataSource::Mock => {
            debug!("Serving mock revenue series");
            tokio::time::sleep(MOCK_FETCH_DELAY).await;
            Ok(mock::revenue())
        }
        DataSource::Live(db) => Revenue::find().all(db).await.map_err(Into::into),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::seeded_source;

    #[tokio::test]
    async fn test_fetch_revenue_mock_returns_twelve_months() -> Result<()> {
        let revenue = fetch_revenue(&DataSource::Mock).await?;

        assert_eq!(revenue.len(), 12);
        assert_eq!(revenue.first().unwrap().month, "Jan");
        assert_eq!(revenue.last().unwrap().month, "Dec");
        assert_eq!(revenue.last().unwrap().revenue, 4800);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_revenue_live_returns_seeded_rows() -> Result<()> {
        let source = seeded_source().await?;
        let revenue = fetch_revenue(&source).await?;

        assert_eq!(revenue.len(), 12);
        assert!(revenue.iter().any(|r| r.month == "Jun" && r.revenue == 3200));
        Ok(())
    }
}
