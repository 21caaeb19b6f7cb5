//! Conekta Payments Core - Shared types library.
//!
//! This crate provides common types used across the Conekta payments
//! workspace:
//! - `gateway` - Quote-to-order mapping and checkout orchestration
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, amounts, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
