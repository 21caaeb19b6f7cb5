//! Quote-to-order mapping record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use conekta_payments_core::{ConektaOrderId, QuoteId};

/// Maps a storefront quote to the Conekta order backing its checkout.
///
/// At most one row exists per quote. Rows are never deleted: an abandoned
/// quote leaves a stale mapping behind, retired only when the Conekta side
/// expires the checkout and a later attempt replaces the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteOrder {
    /// Internal quote id (unique key).
    pub quote_id: QuoteId,
    /// The Conekta order currently associated with the quote.
    pub conekta_order_id: ConektaOrderId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
