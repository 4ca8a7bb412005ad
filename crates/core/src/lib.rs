//! Pitchside Core - Shared types library.
//!
//! This crate provides common types used across all Pitchside components:
//! - `storefront` - Cart, pricing, and checkout engine plus the shop API client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Cart math,
//! the pricing engine, and the REST client live in `pitchside-storefront`;
//! everything here is usable without a network or a rendering environment.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
