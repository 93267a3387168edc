//! Wire types for the Stripe REST API.
//!
//! Only the fields the storefront reads are modeled; everything else in the
//! response is ignored by serde.

use serde::Deserialize;

/// A paginated Stripe list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

/// A field that may arrive as a bare id or as the expanded object,
/// depending on the request's `expand[]` parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Object(Box<T>),
    Id(String),
}

impl<T> Expandable<T> {
    /// The expanded object, if the field was expanded.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Object(object) => Some(object),
            Self::Id(_) => None,
        }
    }
}

/// A Stripe product record.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub default_price: Option<Expandable<Price>>,
}

/// A Stripe price record.
#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    pub id: String,
    /// Amount in the currency's minor unit; absent for metered prices.
    #[serde(default)]
    pub unit_amount: Option<i64>,
    pub currency: String,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

/// Error body inside [`ErrorEnvelope`].
#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product_with_expanded_price() {
        let json = r#"{
            "id": "prod_A",
            "object": "product",
            "name": "Camiseta X",
            "description": "A shirt",
            "images": ["https://files.example.com/a.png"],
            "default_price": {
                "id": "price_A",
                "object": "price",
                "unit_amount": 1000,
                "currency": "brl"
            }
        }"#;

        let product: Product = serde_json::from_str(json).expect("parse product");
        assert_eq!(product.id, "prod_A");
        let price = product
            .default_price
            .as_ref()
            .and_then(Expandable::as_object)
            .expect("expanded price");
        assert_eq!(price.unit_amount, Some(1000));
        assert_eq!(price.currency, "brl");
    }

    #[test]
    fn test_deserialize_product_with_unexpanded_price() {
        let json = r#"{
            "id": "prod_A",
            "name": "Camiseta X",
            "default_price": "price_A"
        }"#;

        let product: Product = serde_json::from_str(json).expect("parse product");
        assert!(matches!(
            product.default_price,
            Some(Expandable::Id(ref id)) if id == "price_A"
        ));
        assert!(product.images.is_empty());
        assert!(product.description.is_none());
    }

    #[test]
    fn test_deserialize_list_envelope() {
        let json = r#"{
            "object": "list",
            "url": "/v1/products",
            "has_more": false,
            "data": [
                {"id": "prod_A", "name": "A"},
                {"id": "prod_B", "name": "B"}
            ]
        }"#;

        let list: List<Product> = serde_json::from_str(json).expect("parse list");
        assert_eq!(list.data.len(), 2);
        assert!(!list.has_more);
    }

    #[test]
    fn test_deserialize_error_envelope() {
        let json = r#"{
            "error": {
                "type": "invalid_request_error",
                "code": "resource_missing",
                "message": "No such product: 'prod_X'"
            }
        }"#;

        let envelope: ErrorEnvelope = serde_json::from_str(json).expect("parse error");
        assert_eq!(envelope.error.code.as_deref(), Some("resource_missing"));
        assert_eq!(
            envelope.error.message.as_deref(),
            Some("No such product: 'prod_X'")
        );
    }
}
