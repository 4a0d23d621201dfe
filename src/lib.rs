//! `Ledgerboard` - Data-access backend for an invoicing dashboard
//!
//! This crate provides the query and formatting layer behind an invoicing
//! dashboard: summary-card aggregates, the revenue chart series, filtered
//! and paginated invoice/customer tables, and single-invoice lookup for
//! edit forms. When no database is configured it serves a fixed demo data
//! set instead, selected explicitly at startup rather than as a hidden
//! fallback on failure.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::cognitive_complexity,
    clippy::match_same_arms,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::cast_precision_loss,      // Cent amounts fit f64 exactly in practice
    clippy::cast_possible_truncation, // Page offsets are small
)]

/// Database configuration and connection handling
pub mod config;
/// The named dashboard queries - cards, revenue, invoices, customers
pub mod core;
/// Explicitly owned store handle (live connection or mock data)
pub mod datasource;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Pure display helpers - currency, dates, chart axis, pagination
pub mod format;
/// Fixed demo payloads served in mock mode
pub mod mock;
/// View models returned to the pages
pub mod models;
/// Demo data seeding for live stores
pub mod seed;

#[cfg(test)]
pub mod test_utils;
