//! The session-scoped shopping cart.
//!
//! # Architecture
//!
//! The cart is a plain value type mutated only through its own operations,
//! conceptually a single-state reducer machine: [`Cart::apply`] turns the
//! previous state plus a [`CartAction`] into the next state. Both transitions
//! are total functions - adding a duplicate id and removing an absent id are
//! expected no-ops, not errors.
//!
//! Aggregates (`item_count`, `subtotal`) are always derived from the current
//! item list at read time and are never stored, so they cannot go stale.
//!
//! Consumers hold the cart in their session layer and re-render from the
//! just-written state after every mutation; the container itself has no
//! locking because all mutations for one cart are serialized by the owning
//! request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, PriceId, ProductId};

/// One product placed in the cart.
///
/// This is the record shape supplied by the catalog collaborator; the cart
/// stores it unchanged. There is no quantity field: a product is either in
/// the bag or it isn't.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique catalog identifier, immutable, assigned by the billing provider.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Display image reference.
    pub image_url: String,
    /// Numeric unit price, the only source of truth for totals.
    pub unit_price: Price,
    /// Billing price variant, passed through opaquely to checkout.
    pub default_price_id: PriceId,
    /// Longer description, present on detail pages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CartItem {
    /// Locale-formatted unit price, derived at read time.
    #[must_use]
    pub fn price_display(&self) -> String {
        self.unit_price.display()
    }
}

/// A state transition of the cart reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add an item; a no-op when an item with the same id is already present.
    Add(CartItem),
    /// Remove the item with this id; a no-op when absent.
    Remove(ProductId),
}

/// The cart aggregate.
///
/// Invariant: `items` never contains two entries with equal `id`, and
/// insertion order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The items currently in the cart, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether an item with this id is currently in the cart.
    ///
    /// Pure query; reflects the latest mutation synchronously.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Add an item to the end of the cart.
    ///
    /// When an item with the same id is already present the call has no
    /// effect and the existing copy wins, even if the incoming item carries
    /// different field values.
    pub fn add(&mut self, item: CartItem) {
        if self.contains(&item.id) {
            return;
        }
        self.items.push(item);
    }

    /// Remove the item with the given id, if present.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Apply a reducer action, producing the next cart state.
    #[must_use]
    pub fn apply(mut self, action: CartAction) -> Self {
        match action {
            CartAction::Add(item) => self.add(item),
            CartAction::Remove(id) => self.remove(&id),
        }
        self
    }

    /// Number of items in the cart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the numeric unit prices of all items.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|item| item.unit_price.amount).sum()
    }

    /// Display currency, taken from the first item (the catalog supplies a
    /// single currency per store).
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.unit_price.currency)
    }

    /// Locale-formatted subtotal, recomputed from `items` at read time.
    #[must_use]
    pub fn subtotal_display(&self) -> String {
        Price::new(self.subtotal(), self.currency()).display()
    }
}
