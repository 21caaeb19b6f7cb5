//! Database operations for the gateway's `PostgreSQL` schema.
//!
//! Stores mapping data only (Conekta is source of truth for order state):
//!
//! ## Tables
//!
//! - `conekta_quote_order` - Quote id to Conekta order id (one row per quote)
//! - `conekta_sales_order` - Conekta order id to placed-order increment id
//!
//! # Migrations
//!
//! Migrations are stored in `crates/gateway/migrations/` and run via:
//! ```bash
//! cargo run -p conekta-payments-cli -- migrate
//! ```

pub mod quote_orders;
pub mod sales_orders;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use quote_orders::QuoteOrderRepository;
pub use sales_orders::SalesOrderRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate quote id).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
