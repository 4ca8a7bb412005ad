//! Pitchside Storefront - cart, pricing, and checkout engine.
//!
//! This crate is the framework-independent core of the Pitchside jersey
//! shop: an explicit [`cart::CartStore`] with a defined mutation API, a pure
//! [`pricing`] module deriving order totals, a [`checkout::CheckoutSubmitter`]
//! that turns a cart snapshot into an order request, and a typed REST client
//! ([`api::ShopClient`]) for the remote catalog/order service.
//!
//! # Architecture
//!
//! - The shop service is the source of truth for products and orders -
//!   direct API calls, no local sync
//! - Cart state lives in memory for the active session; it is mutated only
//!   through `CartStore` and cleared on logout or a confirmed order
//! - Pricing is derived on read from a cart snapshot, so the cart view and
//!   the checkout summary can never disagree on totals
//! - Product reads are cached in-memory via `moka` (5 minute TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use pitchside_storefront::api::ShopClient;
//! use pitchside_storefront::cart::CartStore;
//! use pitchside_storefront::checkout::CheckoutSubmitter;
//! use pitchside_storefront::config::ShopApiConfig;
//! use pitchside_storefront::pricing::PricingBreakdown;
//!
//! let client = ShopClient::new(ShopApiConfig::from_env()?);
//! let products = client.list_products().await?;
//!
//! let mut cart = CartStore::new();
//! cart.add_item(&products[0]);
//!
//! let totals = PricingBreakdown::for_lines(cart.snapshot());
//! let submitter = CheckoutSubmitter::new(client);
//! let confirmation = submitter.submit(cart.snapshot(), &shipping).await?;
//! cart.clear();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod pricing;
