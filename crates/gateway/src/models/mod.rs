//! Persisted mapping records between storefront and Conekta entities.

pub mod quote_order;
pub mod sales_order;

pub use quote_order::QuoteOrder;
pub use sales_order::SalesOrder;
