//! Payment status reported on Conekta orders.

use serde::{Deserialize, Serialize};

/// Payment status of a Conekta order.
///
/// A freshly generated checkout order carries no payment status at all; the
/// field only appears once the order enters a payment flow. Any status
/// therefore means the order can no longer back an editable checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    PendingPayment,
    PreAuthorized,
    Paid,
    PartiallyPaid,
    Declined,
    Expired,
    Refunded,
    PartiallyRefunded,
    ChargedBack,
    Voided,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PendingPayment => "pending_payment",
            Self::PreAuthorized => "pre_authorized",
            Self::Paid => "paid",
            Self::PartiallyPaid => "partially_paid",
            Self::Declined => "declined",
            Self::Expired => "expired",
            Self::Refunded => "refunded",
            Self::PartiallyRefunded => "partially_refunded",
            Self::ChargedBack => "charged_back",
            Self::Voided => "voided",
        };
        write!(f, "{s}")
    }
}
