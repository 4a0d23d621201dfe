//! Unified error types for the dashboard data layer.
//!
//! Store failures are surfaced to callers instead of being masked with
//! fallback data, so a page can tell "query failed" apart from "empty
//! result" and from "running without a configured store".

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration problem (bad environment, bad settings)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what was misconfigured
        message: String,
    },

    /// Any failure reported by the underlying store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Lookup by id matched no invoice
    #[error("Invoice not found: {id}")]
    InvoiceNotFound {
        /// The id that was requested
        id: String,
    },

    /// Page numbers are 1-based; anything below 1 is rejected
    #[error("Invalid page number: {page}")]
    InvalidPage {
        /// The offending page number
        page: u64,
    },

    /// I/O failure outside the store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
