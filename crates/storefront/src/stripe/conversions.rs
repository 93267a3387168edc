//! Conversions from Stripe wire types to catalog records.

use ignite_shop_core::{CartItem, CurrencyCode, Price, PriceId, ProductId};

use super::types;

/// Convert a Stripe product into a catalog record.
///
/// Returns `None` when the product cannot be listed: no expanded default
/// price, a metered price without a unit amount, or a currency the store
/// does not display.
pub fn convert_product(product: types::Product) -> Option<CartItem> {
    let price = product
        .default_price
        .as_ref()
        .and_then(types::Expandable::as_object)?;
    let unit_amount = price.unit_amount?;
    let currency = CurrencyCode::from_code(&price.currency)?;
    let default_price_id = PriceId::new(price.id.clone());

    Some(CartItem {
        id: ProductId::new(product.id),
        name: product.name,
        image_url: product.images.into_iter().next().unwrap_or_default(),
        unit_price: Price::from_minor_units(unit_amount, currency),
        default_price_id,
        description: product.description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stripe::types::{Expandable, Price as WirePrice, Product as WireProduct};
    use rust_decimal::Decimal;

    fn wire_product(unit_amount: Option<i64>, currency: &str) -> WireProduct {
        WireProduct {
            id: "prod_A".to_string(),
            name: "Camiseta X".to_string(),
            description: Some("A shirt".to_string()),
            images: vec![
                "https://files.example.com/a.png".to_string(),
                "https://files.example.com/b.png".to_string(),
            ],
            default_price: Some(Expandable::Object(Box::new(WirePrice {
                id: "price_A".to_string(),
                unit_amount,
                currency: currency.to_string(),
            }))),
        }
    }

    #[test]
    fn test_convert_product() {
        let item = convert_product(wire_product(Some(1000), "brl")).expect("convertible");

        assert_eq!(item.id.as_str(), "prod_A");
        assert_eq!(item.name, "Camiseta X");
        // First image wins
        assert_eq!(item.image_url, "https://files.example.com/a.png");
        assert_eq!(item.unit_price.amount, Decimal::new(1000, 2));
        assert_eq!(item.unit_price.currency, CurrencyCode::BRL);
        assert_eq!(item.default_price_id.as_str(), "price_A");
        assert_eq!(item.description.as_deref(), Some("A shirt"));
        assert_eq!(item.price_display(), "R$ 10,00");
    }

    #[test]
    fn test_convert_product_without_images() {
        let mut product = wire_product(Some(1000), "brl");
        product.images.clear();

        let item = convert_product(product).expect("convertible");
        assert_eq!(item.image_url, "");
    }

    #[test]
    fn test_convert_skips_unexpanded_price() {
        let mut product = wire_product(Some(1000), "brl");
        product.default_price = Some(Expandable::Id("price_A".to_string()));
        assert!(convert_product(product).is_none());
    }

    #[test]
    fn test_convert_skips_missing_price() {
        let mut product = wire_product(Some(1000), "brl");
        product.default_price = None;
        assert!(convert_product(product).is_none());
    }

    #[test]
    fn test_convert_skips_metered_price() {
        assert!(convert_product(wire_product(None, "brl")).is_none());
    }

    #[test]
    fn test_convert_skips_unknown_currency() {
        assert!(convert_product(wire_product(Some(1000), "xyz")).is_none());
    }
}
