//! # Cart
//!
//! The ordered list of items plus the two derived values the presentation
//! layer displays after every change.
//!
//! Order is insertion/display order. Transitions replace or drop entries in
//! place and never reorder the rest.
//!
//! Outside this crate a populated cart only comes from a validated
//! [`CartSeed`](crate::reducer::CartSeed):
//!
//! ```compile_fail
//! use shopcart_core::{Cart, Item};
//!
//! let cart = Cart::new(vec![Item::new(1, "Apple", 0), Item::new(1, "Apple", 0)]);
//! ```

use crate::types::{Item, ItemId};

/// Ordered collection of cart lines.
///
/// ## Invariants (upheld by [`CartSeed`](crate::reducer::CartSeed) and the reducer)
/// - Item ids are unique
/// - `total_quantity()` never exceeds the configured maximum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Wraps an item list without validating it.
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Cart { items }
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of listed lines, including zero-count ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the line with `id`, if present.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Sum of all counts. An empty cart sums to 0.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.count)).sum()
    }

    /// Number of lines with a positive count.
    pub fn items_in_cart_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_in_cart()).count()
    }

    /// Swaps the line at `index` for `item`.
    pub(crate) fn replace(&mut self, index: usize, item: Item) {
        self.items[index] = item;
    }

    /// Drops the line at `index`, shifting later lines up by one.
    pub(crate) fn remove_at(&mut self, index: usize) -> Item {
        self.items.remove(index)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
