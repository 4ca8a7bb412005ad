//! Wire types for the shop service REST API.
//!
//! Field names match the service's JSON exactly (snake_case, `image_url`,
//! `total_price`); monetary amounts arrive and leave as decimal strings and
//! are pinned to string form with `rust_decimal::serde::str`.

use chrono::{DateTime, Utc};
use pitchside_core::{OrderId, OrderStatus, Price, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Product Types
// =============================================================================

/// A catalog product, read-only to the cart core.
///
/// `stock` is informational only - the shop service owns stock enforcement,
/// and the cart does not check quantities against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID assigned by the shop service.
    pub id: ProductId,
    /// Display name (e.g., "Brazil Home Jersey 2026").
    pub name: String,
    /// Longer marketing description, if one has been written.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: Price,
    /// Primary product image URL.
    pub image_url: String,
    /// Category label (e.g., "Home", "Away", "Retro").
    pub category: String,
    /// Units in stock, informational only.
    pub stock: u32,
}

/// Payload for creating or replacing a product (admin surface).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    pub image_url: String,
    pub category: String,
    pub stock: u32,
}

// =============================================================================
// Order Types
// =============================================================================

/// A single order line, snapshotted from the cart at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: i64,
    /// Unit price as snapshotted when the line was first added to the cart,
    /// not a freshly fetched catalog price.
    pub price: Price,
}

/// Outgoing order-creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Grand total at submission time (subtotal + shipping + tax, rounded).
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    /// Ordered line snapshots.
    pub items: Vec<OrderItem>,
}

/// A created order, as returned by the shop service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Order ID assigned by the shop service.
    pub id: OrderId,
    /// Owning user, set server-side from the authenticated session.
    #[serde(default)]
    pub user: Option<UserId>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Total charged.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_parses_service_json() {
        // Decimal fields arrive as strings, as the service serializes them.
        let json = r#"{
            "id": 3,
            "name": "Brazil Home Jersey 2026",
            "description": "Official licensed home kit",
            "price": "79.99",
            "image_url": "https://img.example.com/brazil-home.jpg",
            "category": "Home",
            "stock": 25
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Price::from_major_minor(79, 99));
        assert_eq!(product.stock, 25);
    }

    #[test]
    fn test_order_request_serializes_total_as_string() {
        let order = OrderRequest {
            total_price: Decimal::new(22003, 2),
            items: vec![OrderItem {
                product_id: ProductId::new(3),
                quantity: 2,
                price: Price::from_major_minor(79, 99),
            }],
        };

        let json = serde_json::to_value(&order).expect("serialize");
        assert_eq!(json["total_price"], "220.03");
        assert_eq!(json["items"][0]["product_id"], 3);
        assert_eq!(json["items"][0]["price"], "79.99");
    }

    #[test]
    fn test_order_confirmation_parses() {
        let json = r#"{
            "id": 901,
            "user": 12,
            "status": "pending",
            "total_price": "220.03",
            "created_at": "2026-03-14T09:26:53Z"
        }"#;

        let confirmation: OrderConfirmation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(confirmation.id, OrderId::new(901));
        assert_eq!(confirmation.status, OrderStatus::Pending);
        assert_eq!(confirmation.total_price, Decimal::new(22003, 2));
    }
}
