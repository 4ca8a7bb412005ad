//! Shop service REST client.
//!
//! Wraps the remote catalog/order service behind typed methods. Uses
//! `reqwest` for HTTP with JSON bodies and caches catalog reads with `moka`
//! (5-minute TTL). Admin product mutations invalidate the cache so the
//! storefront never serves a stale catalog after an edit.
//!
//! # Endpoints
//!
//! - `GET products/` - list the catalog
//! - `GET products/{id}/` - fetch one product
//! - `POST products/create/` - create a product (authenticated)
//! - `PUT products/{id}/` - replace a product (authenticated)
//! - `DELETE products/{id}/` - delete a product (authenticated)
//! - `POST orders/` - create an order (authenticated)
//! - `GET orders/{id}/` - fetch one of the caller's orders (authenticated)

mod cache;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use pitchside_core::{OrderId, ProductId};

use crate::config::ShopApiConfig;

use cache::{CacheKey, CacheValue};
use types::{NewProduct, OrderConfirmation, OrderRequest, Product};

/// How many distinct catalog entries the cache may hold.
const CACHE_CAPACITY: u64 = 1000;
/// How long catalog reads stay fresh.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when talking to the shop service.
#[derive(Debug, Error)]
pub enum ShopApiError {
    /// HTTP transport failed (connection refused, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a body that is not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service rejected the request.
    #[error("Shop API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Best available message, drawn from the service's `detail` payload
        /// when present.
        message: String,
    },
}

// =============================================================================
// ShopClient
// =============================================================================

/// Client for the shop service REST API.
///
/// Cheaply cloneable; all clones share one connection pool and one catalog
/// cache.
#[derive(Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

struct ShopClientInner {
    client: reqwest::Client,
    config: ShopApiConfig,
    cache: moka::future::Cache<CacheKey, CacheValue>,
}

impl ShopClient {
    /// Create a new shop API client.
    #[must_use]
    pub fn new(config: ShopApiConfig) -> Self {
        let cache = moka::future::Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ShopClientInner {
                client: reqwest::Client::new(),
                config,
                cache,
            }),
        }
    }

    /// Build a request for `path` relative to the configured base URL,
    /// attaching the bearer token when one is configured.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.inner.config.base_url, path);
        let mut builder = self
            .inner
            .client
            .request(method, url)
            .timeout(self.inner.config.timeout);

        if let Some(token) = &self.inner.config.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        builder
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// List all products, served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ShopApiError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("product list served from cache");
            return Ok(products.to_vec());
        }

        let response = self.request(reqwest::Method::GET, "products/").send().await?;
        let products: Vec<Product> = parse_json(check(response, "product list").await?).await?;

        self.inner
            .cache
            .insert(
                CacheKey::Products,
                CacheValue::Products(products.clone().into()),
            )
            .await;

        Ok(products)
    }

    /// Fetch a single product, served from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns [`ShopApiError::NotFound`] if no product has this ID.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ShopApiError> {
        if let Some(CacheValue::Product(product)) =
            self.inner.cache.get(&CacheKey::Product(id)).await
        {
            debug!(%id, "product served from cache");
            return Ok(*product);
        }

        let response = self
            .request(reqwest::Method::GET, &format!("products/{id}/"))
            .send()
            .await?;
        let product: Product = parse_json(check(response, &format!("product {id}")).await?).await?;

        self.inner
            .cache
            .insert(
                CacheKey::Product(id),
                CacheValue::Product(Box::new(product.clone())),
            )
            .await;

        Ok(product)
    }

    /// Create a product (admin surface). Invalidates the catalog cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it
    /// (e.g., the session is not authenticated).
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ShopApiError> {
        let response = self
            .request(reqwest::Method::POST, "products/create/")
            .json(product)
            .send()
            .await?;
        let created = parse_json(check(response, "product create").await?).await?;

        self.invalidate_catalog();
        Ok(created)
    }

    /// Replace a product (admin surface). Invalidates the catalog cache.
    ///
    /// # Errors
    ///
    /// Returns [`ShopApiError::NotFound`] if no product has this ID.
    #[instrument(skip(self, product))]
    pub async fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
    ) -> Result<Product, ShopApiError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("products/{id}/"))
            .json(product)
            .send()
            .await?;
        let updated = parse_json(check(response, &format!("product {id}")).await?).await?;

        self.invalidate_catalog();
        Ok(updated)
    }

    /// Delete a product (admin surface). Invalidates the catalog cache.
    ///
    /// # Errors
    ///
    /// Returns [`ShopApiError::NotFound`] if no product has this ID.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ShopApiError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("products/{id}/"))
            .send()
            .await?;
        check(response, &format!("product {id}")).await?;

        self.invalidate_catalog();
        Ok(())
    }

    /// Drop all cached catalog entries.
    pub fn invalidate_catalog(&self) {
        self.inner.cache.invalidate_all();
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Submit an order to the shop service.
    ///
    /// One network call per invocation; retry policy is the caller's
    /// decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ShopApiError> {
        let response = self
            .request(reqwest::Method::POST, "orders/")
            .json(order)
            .send()
            .await?;
        let confirmation = parse_json(check(response, "order create").await?).await?;
        Ok(confirmation)
    }

    /// Fetch one of the caller's orders.
    ///
    /// # Errors
    ///
    /// Returns [`ShopApiError::NotFound`] if the order does not exist or
    /// belongs to another user.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<OrderConfirmation, ShopApiError> {
        let response = self
            .request(reqwest::Method::GET, &format!("orders/{id}/"))
            .send()
            .await?;
        let confirmation = parse_json(check(response, &format!("order {id}")).await?).await?;
        Ok(confirmation)
    }
}

// =============================================================================
// Response handling
// =============================================================================

/// Read a successful response body and decode it as JSON.
async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ShopApiError> {
    let body = response.text().await?;
    decode_body(&body)
}

/// Decode a response body, mapping decode failures to [`ShopApiError::Parse`].
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ShopApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Map a non-success response to a typed error.
async fn check(
    response: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response, ShopApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ShopApiError::NotFound(context.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!(
        status = %status,
        body = %body.chars().take(500).collect::<String>(),
        "shop API returned non-success status"
    );

    Err(ShopApiError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Extract the best available message from an error response body.
///
/// The service reports rejections as `{"detail": "..."}`; anything else
/// falls back to a body prefix or a generic message.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }

    let prefix: String = body.chars().take(200).collect();
    if prefix.trim().is_empty() {
        "request rejected by shop service".to_string()
    } else {
        prefix
    }
}
