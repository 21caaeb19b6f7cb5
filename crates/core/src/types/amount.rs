//! Money amounts in centavos.
//!
//! The Conekta API expresses every amount as an integer number of the
//! currency's smallest unit (centavos for MXN). Keeping amounts integral
//! avoids float drift; [`Amount::to_pesos`] converts to a decimal only for
//! display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimum order total accepted by the embedded checkout, in whole pesos.
pub const MINIMUM_AMOUNT_PER_QUOTE: i64 = 20;

/// A monetary amount in centavos (MXN smallest unit).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Zero centavos.
    pub const ZERO: Self = Self(0);

    /// Create an amount from centavos.
    #[must_use]
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Create an amount from whole pesos.
    #[must_use]
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos * 100)
    }

    /// Get the amount in centavos.
    #[must_use]
    pub const fn as_centavos(&self) -> i64 {
        self.0
    }

    /// Convert to a decimal peso amount (e.g. `1999` -> `19.99`).
    #[must_use]
    pub fn to_pesos(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Saturating addition; totals never wrap.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiply a unit price by a quantity, saturating on overflow.
    #[must_use]
    pub const fn saturating_mul_quantity(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.to_pesos())
    }
}

impl From<i64> for Amount {
    fn from(centavos: i64) -> Self {
        Self(centavos)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
