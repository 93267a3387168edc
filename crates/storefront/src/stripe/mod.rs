//! Stripe catalog/billing API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest` - products and their default prices are the
//!   only resources the storefront reads
//! - Stripe is the source of truth for catalog data - NO local sync, direct
//!   API calls
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//!
//! The client returns [`ignite_shop_core::CartItem`] values: the catalog
//! record shape and the cart item shape are the same, and the cart stores
//! catalog records unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use ignite_shop_storefront::stripe::StripeClient;
//!
//! let client = StripeClient::new(&config.stripe);
//!
//! // List the catalog
//! let products = client.list_products().await?;
//!
//! // Fetch one product for a detail page
//! let product = client.get_product(&ProductId::from("prod_123")).await?;
//! ```

mod client;
mod conversions;
pub mod types;

pub use client::StripeClient;

use thiserror::Error;

/// Errors that can occur when interacting with the Stripe API.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API returned an error response.
    #[error("Stripe API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by Stripe.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_error_display() {
        let err = StripeError::NotFound("Product not found: prod_123".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found: prod_123");
    }

    #[test]
    fn test_api_error_display() {
        let err = StripeError::Api {
            status: 401,
            message: "Invalid API Key provided".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Stripe API error (HTTP 401): Invalid API Key provided"
        );
    }

    #[test]
    fn test_rate_limited_error() {
        let err = StripeError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }
}
