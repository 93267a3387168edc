//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use ignite_shop_core::{Cart, CartItem};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::session;
use crate::state::AppState;

/// Product card display data for the listing grid.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub in_cart: bool,
}

impl ProductCardView {
    fn new(item: &CartItem, cart: &Cart) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            price: item.price_display(),
            in_cart: cart.contains(&item.id),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
    pub cart_count: usize,
}

/// Display the home page with the product listing.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let cart = session::load_cart(&session).await?;
    let products = state.catalog().list_products().await?;

    let products = products
        .iter()
        .map(|item| ProductCardView::new(item, &cart))
        .collect();

    Ok(HomeTemplate {
        products,
        cart_count: cart.item_count(),
    })
}
