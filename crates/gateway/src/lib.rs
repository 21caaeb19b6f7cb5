//! Conekta payments gateway library.
//!
//! Maps storefront quotes to Conekta orders and keeps the two in sync while a
//! shopper moves through the embedded checkout. The host application owns HTTP
//! routing and rendering; this crate owns the integration:
//!
//! - [`config`] - Environment-based configuration
//! - [`db`] - Quote/order mapping repositories (`PostgreSQL`)
//! - [`conekta`] - Conekta Orders API client
//! - [`checkout`] - Order generation: validate, then create or update
//! - [`models`] - Persisted mapping records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod conekta;
pub mod config;
pub mod db;
pub mod models;
