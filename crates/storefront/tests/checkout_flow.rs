//! End-to-end cart flow: browse, fill a cart, price it, and place an order
//! against an in-memory order gateway.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use rust_decimal::Decimal;

use pitchside_core::{Email, OrderId, OrderStatus, Price, ProductId};
use pitchside_storefront::api::ShopApiError;
use pitchside_storefront::api::types::{OrderConfirmation, OrderRequest, Product};
use pitchside_storefront::cart::CartStore;
use pitchside_storefront::checkout::{CheckoutSubmitter, OrderGateway, ShippingDetails};
use pitchside_storefront::pricing::PricingBreakdown;

// ============================================================================
// Test fixtures
// ============================================================================

fn jersey(id: i32, name: &str, major: u32, minor: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: Some(format!("Official licensed {name}")),
        price: Price::from_major_minor(major, minor),
        image_url: format!("https://img.example.com/{id}.jpg"),
        category: "Home".to_string(),
        stock: 20,
    }
}

fn shipping() -> ShippingDetails {
    ShippingDetails {
        email: Email::parse("fan@example.com").expect("valid email"),
        first_name: "Ada".to_string(),
        last_name: "Okafor".to_string(),
        address: "1 Stadium Way".to_string(),
        city: "Lagos".to_string(),
        zip_code: "100001".to_string(),
    }
}

/// In-memory order service standing in for the remote collaborator.
#[derive(Default)]
struct FakeOrderService {
    calls: AtomicUsize,
    requests: Mutex<Vec<OrderRequest>>,
    reject_with: Option<String>,
}

impl FakeOrderService {
    fn accepting() -> Self {
        Self::default()
    }

    fn rejecting(detail: &str) -> Self {
        Self {
            reject_with: Some(detail.to_string()),
            ..Self::default()
        }
    }
}

impl OrderGateway for &FakeOrderService {
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ShopApiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().expect("lock").push(order.clone());

        if let Some(detail) = &self.reject_with {
            return Err(ShopApiError::Api {
                status: 400,
                message: detail.clone(),
            });
        }

        Ok(OrderConfirmation {
            id: OrderId::new(i32::try_from(call).expect("small call count") + 1),
            user: None,
            status: OrderStatus::Pending,
            total_price: order.total_price,
            created_at: Utc::now(),
        })
    }
}

// ============================================================================
// Full flow
// ============================================================================

#[tokio::test]
async fn test_browse_fill_cart_and_place_order() {
    let brazil = jersey(1, "Brazil Home Jersey", 79, 99);
    let italy = jersey(2, "Italy Retro Jersey", 34, 50);

    // Fill the cart the way the UI would: two clicks on one product, one on
    // the other, then a quantity correction.
    let mut cart = CartStore::new();
    cart.add_item(&brazil);
    cart.add_item(&italy);
    cart.add_item(&brazil);
    cart.set_quantity(italy.id, 1);

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.item_count(), 3);

    // The cart view and the checkout summary derive the same totals from
    // the same snapshot.
    let totals = PricingBreakdown::for_lines(cart.snapshot());
    assert_eq!(totals.subtotal, Decimal::new(19448, 2));
    assert_eq!(totals.grand_total, Decimal::new(22003, 2));
    assert_eq!(totals, PricingBreakdown::for_lines(cart.snapshot()));

    let service = FakeOrderService::accepting();
    let submitter = CheckoutSubmitter::new(&service);

    let confirmation = submitter
        .submit(cart.snapshot(), &shipping())
        .await
        .expect("order placed");

    assert_eq!(confirmation.id, OrderId::new(1));
    assert_eq!(confirmation.status, OrderStatus::Pending);
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);

    // The submitted payload carries the snapshotted lines and grand total.
    let requests = service.requests.lock().expect("lock");
    let request = requests.first().expect("one request");
    assert_eq!(request.total_price, totals.grand_total);
    assert_eq!(request.items.len(), 2);
    assert_eq!(request.items[0].product_id, brazil.id);
    assert_eq!(request.items[0].quantity, 2);
    assert_eq!(request.items[0].price, brazil.price);
    drop(requests);

    // Clearing the cart is the caller's move once the confirmation arrives.
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(PricingBreakdown::for_lines(cart.snapshot()).grand_total, Decimal::ZERO);
}

#[tokio::test]
async fn test_empty_cart_never_reaches_the_service() {
    let cart = CartStore::new();
    let service = FakeOrderService::accepting();
    let submitter = CheckoutSubmitter::new(&service);

    let result = submitter.submit(cart.snapshot(), &shipping()).await;

    assert!(result.is_err());
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_rejected_order_leaves_cart_intact_for_resubmission() {
    let mut cart = CartStore::new();
    cart.add_item(&jersey(1, "Brazil Home Jersey", 79, 99));

    let rejecting = FakeOrderService::rejecting("Card declined (simulated)");
    let submitter = CheckoutSubmitter::new(&rejecting);

    let err = submitter
        .submit(cart.snapshot(), &shipping())
        .await
        .expect_err("order rejected");
    assert!(err.to_string().contains("Card declined (simulated)"));

    // The cart is untouched; the user may fix the problem and resubmit.
    assert_eq!(cart.item_count(), 1);

    let accepting = FakeOrderService::accepting();
    let retry = CheckoutSubmitter::new(&accepting);
    retry
        .submit(cart.snapshot(), &shipping())
        .await
        .expect("resubmission succeeds");
    assert_eq!(accepting.calls.load(Ordering::SeqCst), 1);
}
