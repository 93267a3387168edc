//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog identifiers
//! are opaque strings assigned by the billing provider (e.g. `prod_...`,
//! `price_...`), so the wrappers are string-backed.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use ignite_shop_core::define_id;
/// define_id!(CustomerId);
/// define_id!(CouponId);
///
/// let customer_id = CustomerId::new("cus_123");
/// let coupon_id = CouponId::new("co_123");
///
/// // These are different types, so this won't compile:
/// // let _: CustomerId = coupon_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(PriceId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_round_trip() {
        let id = ProductId::new("prod_ONoL5SbCS6o2fQ");
        assert_eq!(id.as_str(), "prod_ONoL5SbCS6o2fQ");
        assert_eq!(id.to_string(), "prod_ONoL5SbCS6o2fQ");
        assert_eq!(String::from(id), "prod_ONoL5SbCS6o2fQ");
    }

    #[test]
    fn test_ids_compare_by_value() {
        assert_eq!(ProductId::from("prod_A"), ProductId::new("prod_A"));
        assert_ne!(ProductId::from("prod_A"), ProductId::from("prod_B"));
    }
}
