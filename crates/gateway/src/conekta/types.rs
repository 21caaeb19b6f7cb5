//! Wire types for the Conekta Orders API.
//!
//! Request types serialize only the fields that are set
//! (`skip_serializing_if`), matching how the API treats absent vs. null
//! fields. Response types keep most fields optional: Conekta omits
//! `payment_status` entirely until an order enters a payment flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use conekta_payments_core::{Amount, ConektaOrderId, PaymentStatus};

// =============================================================================
// Requests
// =============================================================================

/// Parameters for creating or updating a Conekta order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// ISO 4217 currency code. The embedded checkout only accepts MXN.
    pub currency: String,
    pub line_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_lines: Option<Vec<DiscountLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_info: Option<CustomerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<CheckoutRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl OrderRequest {
    /// Sum of all line-item totals in centavos.
    #[must_use]
    pub fn line_items_total(&self) -> Amount {
        self.line_items.iter().fold(Amount::ZERO, |total, item| {
            total.saturating_add(item.total())
        })
    }

    /// Copy of the request with customer info removed.
    ///
    /// Conekta rejects updates that resend `customer_info` on an order that
    /// already has a customer attached.
    #[must_use]
    pub fn without_customer_info(&self) -> Self {
        Self {
            customer_info: None,
            ..self.clone()
        }
    }
}

/// A purchasable line in the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Unit price in centavos.
    pub unit_price: Amount,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl LineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.unit_price.saturating_mul_quantity(self.quantity)
    }
}

/// Shipping cost line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingLine {
    /// Shipping cost in centavos.
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Discount applied to the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLine {
    pub code: String,
    /// Discount type: `coupon`, `campaign` or `sign`.
    #[serde(rename = "type")]
    pub discount_type: String,
    /// Discounted amount in centavos.
    pub amount: Amount,
}

/// Tax applied to the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    pub description: String,
    /// Tax amount in centavos.
    pub amount: Amount,
}

/// Shopper identity attached on order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporate: Option<bool>,
}

/// Embedded-checkout settings sent with the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Payment methods offered in the checkout (e.g. `card`, `cash`, `bank_transfer`).
    pub allowed_payment_methods: Vec<String>,
    /// Unix timestamp after which the checkout can no longer be paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_installments_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_installments_options: Option<Vec<u32>>,
}

// =============================================================================
// Responses
// =============================================================================

/// A Conekta order as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: ConektaOrderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Absent until the order enters a payment flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<Checkout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Order {
    /// Whether this order can no longer back an editable checkout.
    ///
    /// True when the order carries any payment status, or when its checkout is
    /// missing or past `expires_at`. The caller must then generate a
    /// replacement order instead of updating this one.
    #[must_use]
    pub fn requires_replacement(&self, now: DateTime<Utc>) -> bool {
        self.payment_status.is_some()
            || self
                .checkout
                .as_ref()
                .is_none_or(|checkout| now.timestamp() >= checkout.expires_at)
    }
}

/// Checkout session attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    pub id: String,
    /// Unix timestamp after which the checkout can no longer be paid.
    pub expires_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order_json(payment_status: Option<&str>, expires_at: i64) -> String {
        let status_field = payment_status
            .map(|s| format!("\"payment_status\": \"{s}\","))
            .unwrap_or_default();
        format!(
            r#"{{
                "id": "ord_2tUigJ8DgBhbp6w5D",
                "amount": 5000,
                "currency": "MXN",
                {status_field}
                "checkout": {{
                    "id": "chk_9a3bd18f07b2145d",
                    "expires_at": {expires_at},
                    "url": "https://pay.conekta.com/checkout/chk_9a3bd18f07b2145d",
                    "status": "Issued"
                }},
                "created_at": 1700000000
            }}"#
        )
    }

    #[test]
    fn test_parse_fresh_order() {
        let order: Order = serde_json::from_str(&order_json(None, 2_000_000_000)).unwrap();
        assert_eq!(order.id.as_str(), "ord_2tUigJ8DgBhbp6w5D");
        assert_eq!(order.amount, Some(Amount::from_centavos(5000)));
        assert!(order.payment_status.is_none());
        assert_eq!(
            order.checkout.unwrap().url.as_deref(),
            Some("https://pay.conekta.com/checkout/chk_9a3bd18f07b2145d")
        );
    }

    #[test]
    fn test_parse_paid_order() {
        let order: Order = serde_json::from_str(&order_json(Some("paid"), 2_000_000_000)).unwrap();
        assert_eq!(
            order.payment_status,
            Some(conekta_payments_core::PaymentStatus::Paid)
        );
    }

    #[test]
    fn test_requires_replacement_matrix() {
        let now = Utc.timestamp_opt(1_800_000_000, 0).unwrap();

        let live: Order = serde_json::from_str(&order_json(None, 1_900_000_000)).unwrap();
        assert!(!live.requires_replacement(now));

        let expired: Order = serde_json::from_str(&order_json(None, 1_700_000_000)).unwrap();
        assert!(expired.requires_replacement(now));

        // Expiry boundary: now == expires_at counts as expired.
        let boundary: Order = serde_json::from_str(&order_json(None, 1_800_000_000)).unwrap();
        assert!(boundary.requires_replacement(now));

        let paid: Order = serde_json::from_str(&order_json(Some("paid"), 1_900_000_000)).unwrap();
        assert!(paid.requires_replacement(now));

        let mut no_checkout: Order = serde_json::from_str(&order_json(None, 1_900_000_000)).unwrap();
        no_checkout.checkout = None;
        assert!(no_checkout.requires_replacement(now));
    }

    #[test]
    fn test_without_customer_info_strips_only_customer() {
        let request = OrderRequest {
            currency: "MXN".to_string(),
            line_items: vec![LineItem {
                name: "Mezcal artesanal".to_string(),
                unit_price: Amount::from_centavos(45000),
                quantity: 1,
                sku: Some("MEZ-001".to_string()),
            }],
            shipping_lines: Some(vec![ShippingLine {
                amount: Amount::from_centavos(9900),
                carrier: Some("Estafeta".to_string()),
                method: None,
            }]),
            discount_lines: None,
            tax_lines: None,
            customer_info: Some(CustomerInfo {
                name: "María Pérez".to_string(),
                email: "maria@example.com".to_string(),
                phone: "+525555555555".to_string(),
                corporate: None,
            }),
            checkout: Some(CheckoutRequest {
                allowed_payment_methods: vec!["card".to_string(), "cash".to_string()],
                expires_at: Some(1_900_000_000),
                monthly_installments_enabled: None,
                monthly_installments_options: None,
            }),
            metadata: None,
        };

        let stripped = request.without_customer_info();
        assert!(stripped.customer_info.is_none());
        assert_eq!(stripped.line_items, request.line_items);
        assert_eq!(stripped.checkout, request.checkout);

        let json = serde_json::to_value(&stripped).unwrap();
        assert!(json.get("customer_info").is_none());
        assert!(json.get("shipping_lines").is_some());
    }

    #[test]
    fn test_line_items_total() {
        let request = OrderRequest {
            currency: "MXN".to_string(),
            line_items: vec![
                LineItem {
                    name: "Taza".to_string(),
                    unit_price: Amount::from_centavos(1500),
                    quantity: 2,
                    sku: None,
                },
                LineItem {
                    name: "Plato".to_string(),
                    unit_price: Amount::from_centavos(700),
                    quantity: 1,
                    sku: None,
                },
            ],
            shipping_lines: None,
            discount_lines: None,
            tax_lines: None,
            customer_info: None,
            checkout: None,
            metadata: None,
        };

        assert_eq!(request.line_items_total(), Amount::from_centavos(3700));
    }
}
