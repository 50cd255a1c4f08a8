use crate::model::CatalogItem;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Sales tax applied to the subtotal.
pub const TAX_RATE: Decimal = dec!(0.12);

/// Smallest quantity a line item may hold. Updates below it are rejected.
pub const MIN_QUANTITY: u32 = 1;

/// One catalog product plus the quantity the customer has added.
///
/// Line items are unique by `id` within a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
    pub description: String,
}

impl CartLineItem {
    /// Creates a line item holding a single unit of `item`.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: MIN_QUANTITY,
            image: item.image.clone(),
            description: item.description.clone(),
        }
    }

    /// `price * quantity`, unrounded.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Subtotal, tax and grand total of a cart.
///
/// Values are kept at full precision; round only when displaying
/// (see [`format_money`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub total: Decimal,
    pub tax: Decimal,
    pub grand_total: Decimal,
}

impl CartTotals {
    /// Derives the totals from a sequence of line items.
    pub fn from_items(items: &[CartLineItem]) -> Self {
        let total: Decimal = items.iter().map(CartLineItem::line_total).sum();
        let tax = total * TAX_RATE;
        Self {
            total,
            tax,
            grand_total: total + tax,
        }
    }
}

/// Snapshot of the cart: line items in insertion order plus derived totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items (the nav badge count).
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Formats a dollar amount for display, rounding half away from zero to cents.
///
/// ```
/// use bagdat_order::model::format_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_money(dec!(45.8864)), "$45.89");
/// assert_eq!(format_money(dec!(0)), "$0.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: id.to_string(),
            name: id.to_string(),
            price,
            quantity,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_totals_from_items() {
        let items = vec![
            line("starter-1", dec!(8.99), 2),
            line("main-3", dec!(22.99), 1),
        ];
        let totals = CartTotals::from_items(&items);
        assert_eq!(totals.total, dec!(40.97));
        assert_eq!(totals.tax, dec!(4.9164));
        assert_eq!(totals.grand_total, dec!(45.8864));
    }

    #[test]
    fn test_totals_of_empty_cart_are_zero() {
        assert_eq!(CartTotals::from_items(&[]), CartTotals::default());
    }

    #[test]
    fn test_format_money_rounds_at_display_time() {
        assert_eq!(format_money(dec!(45.8864)), "$45.89");
        assert_eq!(format_money(dec!(4.9164)), "$4.92");
        assert_eq!(format_money(dec!(40.97)), "$40.97");
        assert_eq!(format_money(dec!(0.005)), "$0.01");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let state = CartState {
            items: vec![line("a", dec!(1), 2), line("b", dec!(1), 3)],
            totals: CartTotals::default(),
        };
        assert_eq!(state.item_count(), 5);
        assert_eq!(state.get("b").map(|i| i.quantity), Some(3));
    }
}
