//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! conekta-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `GATEWAY_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! Migration files live in `crates/gateway/migrations/`.

use secrecy::SecretString;
use thiserror::Error;

use conekta_payments_gateway::db;

/// Errors that can occur while running migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run gateway database migrations.
///
/// Only the database URL is read here; the Conekta API key is not needed to
/// migrate.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing, the database is
/// unreachable, or a migration fails.
pub async fn gateway() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("GATEWAY_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar("GATEWAY_DATABASE_URL"))?;

    tracing::info!("Connecting to gateway database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running gateway migrations...");
    sqlx::migrate!("../gateway/migrations").run(&pool).await?;

    tracing::info!("Gateway migrations complete!");
    Ok(())
}
