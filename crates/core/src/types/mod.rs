//! Core types for the Conekta payments integration.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod id;
pub mod status;

pub use amount::{Amount, MINIMUM_AMOUNT_PER_QUOTE};
pub use id::*;
pub use status::PaymentStatus;
