//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use ignite_shop_core::{Cart, CartItem, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::session;
use crate::state::AppState;

/// Product display data for the detail page.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub description: String,
    pub in_cart: bool,
}

impl ProductView {
    fn new(item: &CartItem, cart: &Cart) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            price: item.price_display(),
            description: item.description.clone().unwrap_or_default(),
            in_cart: cart.contains(&item.id),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
    pub cart_count: usize,
}

/// Display the product detail page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<ProductShowTemplate> {
    let id = ProductId::from(id);
    let cart = session::load_cart(&session).await?;
    let item = state.catalog().get_product(&id).await?;

    Ok(ProductShowTemplate {
        product: ProductView::new(&item, &cart),
        cart_count: cart.item_count(),
    })
}
