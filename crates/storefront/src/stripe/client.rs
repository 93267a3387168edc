//! Stripe REST client implementation.
//!
//! Uses `reqwest` with bearer auth and a pinned `Stripe-Version` header.
//! Catalog responses are cached with `moka` (5-minute TTL), standing in for
//! the static-page regeneration interval a prerendered storefront would use.

use std::sync::Arc;
use std::time::Duration;

use ignite_shop_core::{CartItem, ProductId};
use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::StripeConfig;

use super::StripeError;
use super::conversions::convert_product;
use super::types;

/// Cached catalog values.
#[derive(Debug, Clone)]
enum CacheValue {
    Product(Box<CartItem>),
    Products(Arc<Vec<CartItem>>),
}

/// Client for the Stripe catalog/billing API.
///
/// Provides read-only access to products and their default prices.
#[derive(Clone)]
pub struct StripeClient {
    inner: Arc<StripeClientInner>,
}

struct StripeClientInner {
    client: reqwest::Client,
    api_base: String,
    api_version: String,
    secret_key: String,
    cache: Cache<String, CacheValue>,
}

impl StripeClient {
    /// Create a new Stripe client.
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(StripeClientInner {
                client: reqwest::Client::new(),
                api_base: config.api_base.trim_end_matches('/').to_string(),
                api_version: config.api_version.clone(),
                secret_key: config.secret_key.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Execute a GET request against the API.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StripeError> {
        let url = format!("{}{path}", self.inner.api_base);

        let response = self
            .inner
            .client
            .get(&url)
            .bearer_auth(&self.inner.secret_key)
            .header("Stripe-Version", &self.inner.api_version)
            .query(query)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(StripeError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<types::ErrorEnvelope>(&response_text)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| response_text.chars().take(200).collect());

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(StripeError::NotFound(message));
            }

            tracing::error!(
                status = %status,
                message = %message,
                "Stripe API returned non-success status"
            );
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Stripe response"
                );
                Err(StripeError::Parse(e))
            }
        }
    }

    /// List the active catalog with default prices expanded.
    ///
    /// Products without a usable default price (unexpanded, metered, or in a
    /// currency the store does not display) are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Arc<Vec<CartItem>>, StripeError> {
        let cache_key = "products".to_string();

        // Check cache
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product list");
            return Ok(products);
        }

        let list: types::List<types::Product> = self
            .get(
                "/v1/products",
                &[
                    ("active", "true"),
                    ("limit", "100"),
                    ("expand[]", "data.default_price"),
                ],
            )
            .await?;

        let products: Vec<CartItem> = list
            .data
            .into_iter()
            .filter_map(|product| {
                let id = product.id.clone();
                let converted = convert_product(product);
                if converted.is_none() {
                    warn!(product_id = %id, "Skipping product without a usable default price");
                }
                converted
            })
            .collect();
        let products = Arc::new(products);

        // Cache the result
        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(Arc::clone(&products)))
            .await;

        Ok(products)
    }

    /// Get a product by its catalog id, with the default price expanded.
    ///
    /// # Errors
    ///
    /// Returns `StripeError::NotFound` if the product does not exist or has
    /// no usable default price, or another error if the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<CartItem, StripeError> {
        let cache_key = format!("product:{id}");

        // Check cache
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let product: types::Product = self
            .get(
                &format!("/v1/products/{id}"),
                &[("expand[]", "default_price")],
            )
            .await?;

        let item = convert_product(product)
            .ok_or_else(|| StripeError::NotFound(format!("Product not purchasable: {id}")))?;

        // Cache the result
        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(item.clone())))
            .await;

        Ok(item)
    }
}
