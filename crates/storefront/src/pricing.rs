//! Order pricing.
//!
//! [`PricingBreakdown::for_lines`] is a pure function over a cart snapshot
//! and is the single source of totals for the cart view, the checkout
//! summary, and the order submission payload - the three surfaces can never
//! disagree.
//!
//! Accumulation is exact decimal arithmetic; only the four output fields are
//! rounded to cents, so rounding error never compounds across lines.

use rust_decimal::Decimal;
use serde::Serialize;

use pitchside_core::round_to_cents;

use crate::cart::CartLine;

/// Flat shipping fee in USD, charged on any non-empty order.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(999, 0, 0, false, 2);

/// Flat sales tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Derived order totals. Not stored anywhere - recomputed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingBreakdown {
    /// Σ(price × quantity) over all lines, rounded to cents.
    pub subtotal: Decimal,
    /// [`SHIPPING_FEE`] when the cart is non-empty, zero otherwise.
    pub shipping_fee: Decimal,
    /// Subtotal × [`TAX_RATE`], rounded to cents.
    pub tax_amount: Decimal,
    /// Subtotal + shipping + tax, rounded to cents.
    pub grand_total: Decimal,
}

impl PricingBreakdown {
    /// The breakdown for an empty cart: all four fields zero. No shipping
    /// is charged on an empty order.
    pub const EMPTY: Self = Self {
        subtotal: Decimal::ZERO,
        shipping_fee: Decimal::ZERO,
        tax_amount: Decimal::ZERO,
        grand_total: Decimal::ZERO,
    };

    /// Derive the breakdown for a cart snapshot.
    ///
    /// Pure and deterministic: the same snapshot always yields the same
    /// breakdown. The grand total is computed from the exact (unrounded)
    /// components and rounded once at the end.
    #[must_use]
    pub fn for_lines(lines: &[CartLine]) -> Self {
        if lines.is_empty() {
            return Self::EMPTY;
        }

        let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal * TAX_RATE;
        let grand_total = subtotal + SHIPPING_FEE + tax;

        Self {
            subtotal: round_to_cents(subtotal),
            shipping_fee: SHIPPING_FEE,
            tax_amount: round_to_cents(tax),
            grand_total: round_to_cents(grand_total),
        }
    }
}
