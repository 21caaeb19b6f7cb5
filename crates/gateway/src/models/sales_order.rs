//! Conekta order to placed-order mapping record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use conekta_payments_core::{ConektaOrderId, IncrementOrderId};

/// Links a Conekta order to the platform order placed from it.
///
/// Written once checkout completes, so webhook handlers can resolve a Conekta
/// order id back to the platform's order number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: i32,
    pub conekta_order_id: ConektaOrderId,
    pub increment_order_id: IncrementOrderId,
    pub created_at: DateTime<Utc>,
}
