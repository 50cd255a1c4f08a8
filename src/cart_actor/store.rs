//! The cart state and its mutation rules.
//!
//! [`CartStore`] is a plain owned value: its `&mut self` methods are the only
//! way to change the cart, and every one of them recomputes the totals before
//! returning, so a snapshot is never stale. It knows nothing about tasks or
//! channels; [`CartActor`](super::CartActor) hosts it when several views need
//! to share one cart.

use crate::model::{CartLineItem, CartState, CartTotals, CatalogItem, MIN_QUANTITY};
use rust_decimal::Decimal;
use tracing::debug;

/// Outcome of [`CartStore::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The quantity was set to the requested value.
    Applied,
    /// The requested value was below the floor; the prior quantity was kept.
    BelowMinimum,
    /// No line item has that id.
    UnknownItem,
}

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`: increments an existing line or appends a new one.
    pub fn add_item(&mut self, item: &CatalogItem) {
        match self.state.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.state.items.push(CartLineItem::from_catalog(item)),
        }
        self.recompute();
    }

    /// Sets the quantity of a line item exactly.
    ///
    /// Quantities below [`MIN_QUANTITY`] are rejected and the line keeps its
    /// prior quantity; use [`remove_item`](Self::remove_item) to drop a line.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> QuantityChange {
        let change = if quantity < MIN_QUANTITY {
            QuantityChange::BelowMinimum
        } else {
            match self.state.items.iter_mut().find(|line| line.id == id) {
                Some(line) => {
                    line.quantity = quantity;
                    QuantityChange::Applied
                }
                None => QuantityChange::UnknownItem,
            }
        };
        if change != QuantityChange::Applied {
            debug!(item_id = id, quantity, ?change, "Quantity unchanged");
        }
        self.recompute();
        change
    }

    /// Removes a line item. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.state.items.len();
        self.state.items.retain(|line| line.id != id);
        self.recompute();
        self.state.items.len() != before
    }

    pub fn clear(&mut self) {
        self.state.items.clear();
        self.recompute();
    }

    /// Empties the cart and returns what it held, in one step.
    pub fn take(&mut self) -> CartState {
        let taken = std::mem::take(&mut self.state);
        self.recompute();
        taken
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn totals(&self) -> CartTotals {
        self.state.totals
    }

    pub fn item_count(&self) -> u32 {
        self.state.item_count()
    }

    /// `price * quantity` for one line, if present.
    pub fn line_total(&self, id: &str) -> Option<Decimal> {
        self.state.get(id).map(CartLineItem::line_total)
    }

    fn recompute(&mut self) {
        self.state.totals = CartTotals::from_items(&self.state.items);
    }
}
