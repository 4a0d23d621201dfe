//! Explicitly owned handle to whatever backs the data-access layer.
//!
//! Instead of a process-wide lazily-initialized connection, the store is a
//! [`DataSource`] value built once at startup and passed by reference into
//! every fetch function. Mock mode is a deliberate state of this handle, not
//! a fallback taken silently on failure.

use crate::config::database;
use crate::errors::Result;
use sea_orm::DatabaseConnection;
use tracing::info;

/// Backing store for the data-access layer: a live database connection, or
/// the fixed in-memory demo payloads when none is configured.
#[derive(Clone, Debug)]
pub enum DataSource {
    /// Queries go to a real database
    Live(DatabaseConnection),
    /// Queries are answered from the fixed mock data set
    Mock,
}

impl DataSource {
    /// Builds a data source from the `DATABASE_URL` environment variable.
    ///
    /// An absent variable, an empty value, or the literal placeholder
    /// `postgres://...` selects mock mode; anything else is treated as a
    /// connection URL and must be reachable.
    ///
    /// # Errors
    /// Returns `Error::Database` when a configured URL cannot be connected.
    pub async fn from_env() -> Result<Self> {
        match database::database_url() {
            Some(url) => {
                let db = database::connect(&url).await?;
                info!("Connected to database");
                Ok(Self::Live(db))
            }
            None => {
                info!("No database configured, serving mock data");
                Ok(Self::Mock)
            }
        }
    }

    /// Returns true when this source serves the fixed mock payloads.
    #[must_use]
    pub const fn is_mock(&self) -> bool {
        matches!(self, Self::Mock)
    }
}
