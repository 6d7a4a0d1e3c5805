//! Shopping cart
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A product in the cart with the quantity the visitor wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

/// Shopping cart state.
///
/// Holds at most one item per product id, in the order products were first added.
/// The total is derived on every read rather than cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Find a cart item by product id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Add one unit of a product.
    /// Returns the new quantity for that product.
    pub fn add_product(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.find_mut(&product.id) {
            item.quantity = item.quantity.saturating_add(1);
            item.quantity
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
            1
        }
    }

    /// Set the quantity of an item already in the cart.
    ///
    /// Quantities below 1 are ignored, as are ids that are not in the cart.
    /// Requests above `u32::MAX` are clamped to it.
    /// Returns whether anything changed.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.find_mut(id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove an item entirely. Returns the removed item, if any.
    pub fn remove(&mut self, id: &str) -> Option<CartItem> {
        let idx = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(idx))
    }

    /// Clear the entire cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over every item.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Line total for a single product, 0 if it is not in the cart.
    #[must_use]
    pub fn line_total(&self, id: &str) -> u64 {
        self.find(id).map_or(0, CartItem::line_total)
    }

    /// Current quantity of a product in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.find(id).map_or(0, |item| item.quantity)
    }

    /// Number of units across all items.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    fn lemon() -> Product {
        product("1", "Lemon Fresh", "Lemon Scented", 240)
    }

    fn lavender() -> Product {
        product("3", "Lavender Breeze", "Lavender Scented", 240)
    }

    #[test]
    fn adding_twice_merges_into_one_item() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_product(&lemon()), 1);
        assert_eq!(cart.add_product(&lemon()), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
        assert_eq!(cart.items()[0].product, lemon());
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(&lavender());
        cart.add_product(&lemon());
        cart.add_product(&lavender());
        let ids: Vec<_> = cart.items().iter().map(CartItem::id).collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn zero_and_negative_quantities_are_ignored() {
        let mut cart = Cart::new();
        cart.add_product(&lemon());
        cart.add_product(&lemon());
        let before = cart.clone();

        assert!(!cart.update_quantity("1", 0));
        assert!(!cart.update_quantity("1", -1));
        assert!(!cart.update_quantity("1", i64::MIN));
        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_only_touches_matching_item() {
        let mut cart = Cart::new();
        cart.add_product(&lemon());
        cart.add_product(&lavender());

        assert!(cart.update_quantity("3", 5));
        assert_eq!(cart.quantity_of("3"), 5);
        assert_eq!(cart.quantity_of("1"), 1);
        assert!(!cart.update_quantity("missing", 3));
    }

    #[test]
    fn oversized_quantity_clamps_to_max() {
        let mut cart = Cart::new();
        cart.add_product(&lemon());

        assert!(cart.update_quantity("1", i64::from(u32::MAX) + 1));
        assert_eq!(cart.quantity_of("1"), u32::MAX);
        assert!(!cart.update_quantity("1", i64::MAX));
        assert_eq!(cart.line_total("1"), u64::from(u32::MAX) * 240);
    }

    #[test]
    fn total_tracks_every_change() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0);
        cart.add_product(&lemon());
        assert_eq!(cart.total(), 240);
        cart.add_product(&lavender());
        cart.update_quantity("3", 2);
        assert_eq!(cart.total(), 720);
        assert_eq!(cart.line_total("3"), 480);
        assert_eq!(cart.item_count(), 3);
        cart.remove("1");
        assert_eq!(cart.total(), 480);
        cart.clear();
        assert_eq!(cart.total(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn removing_missing_item_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&lemon());
        assert!(cart.remove("2").is_none());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.remove("1").map(|item| item.quantity), Some(1));
        assert!(cart.is_empty());
    }
}
