//! In-memory shopping cart.
//!
//! [`CartStore`] is the sole mutator of cart state and guarantees two
//! invariants:
//!
//! - at most one [`CartLine`] per distinct product ID
//! - every stored quantity is >= 1; a line driven to zero or below is
//!   removed, never retained
//!
//! Lines denormalize the product's name, price, and image at first-add time,
//! so a server-side price change never retroactively alters an open cart.
//! Insertion order is preserved for stable display.
//!
//! The store expects a single sequential event stream per session (UI event
//! handlers) and performs no internal locking.

use rust_decimal::Decimal;
use serde::Serialize;

use pitchside_core::{Price, ProductId};

use crate::api::types::Product;

/// A single cart line: one distinct product plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Name snapshot taken when the line was first added.
    pub name: String,
    /// Unit price snapshot taken when the line was first added.
    pub price: Price,
    /// Image snapshot taken when the line was first added.
    pub image_url: String,
    /// Units in the cart, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity: 1,
        }
    }

    /// Exact extended total for this line (price × quantity, unrounded).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.line_total(self.quantity)
    }
}

/// The session cart: an ordered collection of [`CartLine`]s.
///
/// Created empty at session start, mutated only through the methods below,
/// and cleared on logout or after a confirmed order.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If a line for this product already exists its quantity is incremented
    /// and the existing name/price/image snapshot is kept - the cart always
    /// reflects the price at first-add time. Otherwise a new quantity-1 line
    /// is appended.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::for_product(product));
        }
    }

    /// Remove the line for `product_id`. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity of zero or below behaves exactly like
    /// [`remove_item`](Self::remove_item). Otherwise the line's quantity is
    /// set if the line exists; absent lines are a no-op. The store never
    /// holds a non-positive quantity.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        // Quantities beyond u32 are not meaningful orders; ignore rather
        // than corrupt the line.
        let Ok(quantity) = u32::try_from(quantity) else {
            return;
        };

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally (logout, confirmed order).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Read-only view of the cart lines in insertion order.
    ///
    /// All changes go through the mutators above.
    #[must_use]
    pub fn snapshot(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }
}
