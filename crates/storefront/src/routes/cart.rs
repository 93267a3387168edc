//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart value lives in the session; every mutating handler writes the new
//! state back and answers with an `HX-Trigger: cart-updated` header so every
//! cart-displaying fragment re-renders from the just-written state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use ignite_shop_core::{Cart, CartAction, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::session;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: String,
}

/// Cart display data for templates.
///
/// The aggregates are computed from the cart value at render time.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: usize,
    pub subtotal: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    image_url: item.image_url.clone(),
                    price: item.price_display(),
                })
                .collect(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal_display(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: usize,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<CartShowTemplate> {
    let cart = session::load_cart(&session).await?;

    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
        cart_count: cart.item_count(),
    })
}

/// Add a product to the cart (HTMX).
///
/// The product data comes from the catalog, not the form, so a stale page
/// cannot place outdated prices in the cart. Adding a product that is
/// already in the cart is an expected no-op, answered with the unchanged
/// count badge.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ProductId::from(form.product_id);

    let cart = session::load_cart(&session).await?;
    if cart.contains(&id) {
        // Duplicate add: state unchanged, no notification needed
        return Ok(CartCountTemplate {
            count: cart.item_count(),
        }
        .into_response());
    }

    let item = state.catalog().get_product(&id).await?;
    add_breadcrumb("cart", "Added product to bag", Some(&[("product_id", id.as_str())]));

    let cart = cart.apply(CartAction::Add(item));
    session::save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Remove a product from the cart (HTMX).
///
/// Removing an id that is not in the cart is a no-op.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let id = ProductId::from(form.product_id);

    let cart = session::load_cart(&session).await?;
    add_breadcrumb("cart", "Removed product from bag", Some(&[("product_id", id.as_str())]));

    let cart = cart.apply(CartAction::Remove(id));
    session::save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = session::load_cart(&session).await?;

    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignite_shop_core::{CartItem, CurrencyCode, Price, PriceId};

    fn item(id: &str, cents: i64) -> CartItem {
        CartItem {
            id: ProductId::from(id),
            name: format!("Shirt {id}"),
            image_url: format!("https://files.example.com/{id}.png"),
            unit_price: Price::from_minor_units(cents, CurrencyCode::BRL),
            default_price_id: PriceId::new(format!("price_{id}")),
            description: None,
        }
    }

    #[test]
    fn test_cart_view_from_empty_cart() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "R$ 0,00");
    }

    #[test]
    fn test_cart_view_derives_aggregates() {
        let cart = Cart::new()
            .apply(CartAction::Add(item("A", 1000)))
            .apply(CartAction::Add(item("B", 2500)));

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal, "R$ 35,00");

        let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(view.items.first().map(|i| i.price.as_str()), Some("R$ 10,00"));
    }
}
