//! Checkout orchestration.
//!
//! [`CheckoutSubmitter`] turns a cart snapshot plus shipping-form data into
//! an order-creation request and sends it through an [`OrderGateway`]
//! exactly once per submission. There is no automatic retry and no internal
//! mutual exclusion: two concurrent submissions would produce two orders, so
//! callers must keep a single in-flight guard and disable resubmission while
//! a request is outstanding.
//!
//! On success the caller receives the confirmation and is responsible for
//! clearing the cart - a failed clear must not silently lose cart contents
//! on an ambiguous outcome, so the submitter never clears it itself.

use thiserror::Error;
use tracing::{instrument, warn};

use pitchside_core::Email;

use crate::api::types::{OrderConfirmation, OrderItem, OrderRequest};
use crate::api::{ShopApiError, ShopClient};
use crate::cart::CartLine;
use crate::pricing::PricingBreakdown;

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout attempted with no cart lines. Locally preventable; no
    /// network request is issued.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// A required shipping field is blank. Locally preventable; no network
    /// request is issued.
    #[error("missing required shipping field: {field}")]
    IncompleteShipping {
        /// Name of the blank field.
        field: &'static str,
    },

    /// The order-creation call failed (network failure or rejected
    /// request). Carries the best available message from the service.
    #[error("order submission failed: {0}")]
    Submission(String),
}

/// Shipping details collected on the checkout form.
///
/// Validated locally before submission; the simulated-payment shop service
/// does not receive them.
#[derive(Debug, Clone)]
pub struct ShippingDetails {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
}

impl ShippingDetails {
    /// Check that every required field is non-blank.
    ///
    /// The email is already structurally valid by construction.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::IncompleteShipping`] naming the first blank
    /// field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("zip_code", &self.zip_code),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(CheckoutError::IncompleteShipping { field });
            }
        }

        Ok(())
    }
}

/// The order-creation seam to the shop service.
///
/// [`ShopClient`] implements this for production; tests substitute an
/// in-memory gateway to observe call counts and payloads.
pub trait OrderGateway {
    /// Send one order-creation request.
    fn create_order(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = Result<OrderConfirmation, ShopApiError>> + Send;
}

impl OrderGateway for ShopClient {
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ShopApiError> {
        ShopClient::create_order(self, order).await
    }
}

/// Orchestrates order placement from a cart snapshot and shipping details.
#[derive(Debug, Clone)]
pub struct CheckoutSubmitter<G> {
    gateway: G,
}

impl<G: OrderGateway> CheckoutSubmitter<G> {
    /// Create a submitter over an order gateway.
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Submit an order for the given cart snapshot.
    ///
    /// Builds the request from the snapshot and the derived grand total,
    /// preserving each line's product ID, quantity, and first-add price
    /// snapshot. Issues exactly one gateway call; a failed attempt is
    /// reported to the caller, who may resubmit.
    ///
    /// On success the cart is NOT cleared here - clear it after receiving
    /// the confirmation.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] if the snapshot has no lines
    /// - [`CheckoutError::IncompleteShipping`] if a required field is blank
    /// - [`CheckoutError::Submission`] if the service call fails
    #[instrument(skip(self, lines, shipping), fields(line_count = lines.len()))]
    pub async fn submit(
        &self,
        lines: &[CartLine],
        shipping: &ShippingDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        shipping.validate()?;

        let totals = PricingBreakdown::for_lines(lines);
        let order = OrderRequest {
            total_price: totals.grand_total,
            items: lines
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id,
                    quantity: i64::from(line.quantity),
                    price: line.price,
                })
                .collect(),
        };

        self.gateway.create_order(&order).await.map_err(|err| {
            warn!(error = %err, "order submission failed");
            match err {
                ShopApiError::Api { message, .. } => CheckoutError::Submission(message),
                other => CheckoutError::Submission(other.to_string()),
            }
        })
    }
}
