//! Conekta Orders API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`; auth and Accept headers are built once at
//!   client construction
//! - Conekta is source of truth for order state - NO local sync, direct API
//!   calls on every checkout attempt
//! - Amounts are integer centavos end to end
//!
//! # Example
//!
//! ```rust,ignore
//! use conekta_payments_gateway::conekta::OrdersClient;
//!
//! let client = OrdersClient::new(&config.conekta)?;
//!
//! let order = client.create(&order_request).await?;
//! let found = client.find(&order.id).await?;
//! ```

mod orders;
pub mod types;

pub use orders::OrdersClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with the Conekta API.
#[derive(Debug, Error)]
pub enum ConektaError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Order parameters were rejected by the API.
    #[error("parameter validation error: {0}")]
    ParameterValidation(String),

    /// Order not found.
    #[error("order not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),
}
