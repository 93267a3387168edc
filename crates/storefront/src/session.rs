//! Session configuration and cart persistence.
//!
//! Sessions use the in-process `tower-sessions` memory store: the cart is
//! created empty when a session first writes it and is discarded with the
//! session. Nothing is persisted across restarts or shared across devices.

use ignite_shop_core::Cart;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "ignite_session";

/// Session expiry time in seconds (2 days of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 2 * 24 * 60 * 60;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the session's cart.
    pub const CART: &str = "cart";
}

/// Create the session layer with the in-process memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Load the session's cart, or an empty cart if none was stored yet.
///
/// # Errors
///
/// Returns an error if the session backend fails.
pub async fn load_cart(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Save the cart back into the session.
///
/// # Errors
///
/// Returns an error if the session backend fails.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}
