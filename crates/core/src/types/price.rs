//! Type-safe price representation using decimal arithmetic.
//!
//! All monetary values flow through [`Price`] or plain [`Decimal`] totals.
//! Accumulation (price × quantity sums) stays exact; rounding to cents
//! happens only at display and submission boundaries via [`round_to_cents`],
//! so per-line rounding error never compounds across a large cart.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative unit price in the store currency (USD).
///
/// ## Constraints
///
/// - Amount must be >= 0 (enforced at construction and deserialization)
/// - Catalog prices carry at most 2 decimal places, but this type does not
///   truncate - the exact value received from the shop service is preserved
///
/// ## Examples
///
/// ```
/// use pitchside_core::Price;
///
/// let price = Price::from_major_minor(79, 99);
/// assert_eq!(price.line_total(2).to_string(), "159.98");
/// assert_eq!(price.to_string(), "$79.99");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a `Price` from major and minor units (dollars and cents).
    #[must_use]
    pub fn from_major_minor(major: u32, minor: u32) -> Self {
        Self(Decimal::from(major) + Decimal::new(i64::from(minor), 2))
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The exact extended total for `quantity` units.
    ///
    /// No rounding is applied; callers accumulate exact line totals and
    /// round once at the output boundary.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }

    /// The amount rounded to cents for display or submission.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        round_to_cents(self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

/// Round a monetary value to 2 decimal places.
///
/// Uses midpoint-away-from-zero rounding, matching how the storefront
/// displays totals, so `15.5584` becomes `15.56` and `0.125` becomes `0.13`.
#[must_use]
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_amount() {
        let err = Price::new(Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(err, PriceError::Negative(Decimal::new(-1, 2)));
    }

    #[test]
    fn test_from_major_minor() {
        let price = Price::from_major_minor(34, 50);
        assert_eq!(price.amount(), Decimal::new(3450, 2));
    }

    #[test]
    fn test_line_total_is_exact() {
        let price = Price::from_major_minor(79, 99);
        assert_eq!(price.line_total(3), Decimal::new(23997, 2));
    }

    #[test]
    fn test_round_to_cents_midpoint() {
        assert_eq!(
            round_to_cents(Decimal::new(155_584, 4)),
            Decimal::new(1556, 2)
        );
        assert_eq!(round_to_cents(Decimal::new(125, 3)), Decimal::new(13, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_major_minor(5, 5).to_string(), "$5.05");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_serde_string_roundtrip() {
        let price: Price = serde_json::from_str("\"79.99\"").expect("deserialize");
        assert_eq!(price, Price::from_major_minor(79, 99));
        assert!(serde_json::from_str::<Price>("\"-1.00\"").is_err());
    }
}
