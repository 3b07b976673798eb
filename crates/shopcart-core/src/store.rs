//! # Cart Store
//!
//! Owns the live cart and routes every mutation through [`reduce`].
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  User Intent             CartStore call             Cart Change         │
//! │  ───────────             ──────────────             ───────────         │
//! │                                                                         │
//! │  Click [+] ────────────► increase(id) ────────────► items[i].count + 1 │
//! │                                                                         │
//! │  Click [-] ────────────► decrease(id) ────────────► items[i].count - 1 │
//! │                                                                         │
//! │  Click Remove ─────────► remove(id) ──────────────► items.remove(i)    │
//! │                                                                         │
//! │  Click Reset ──────────► reset() ─────────────────► items = seed       │
//! │                                                                         │
//! │  Render ───────────────► view() ──────────────────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is a plain value owned by the presentation layer. Mutations
//! take `&mut self`; there is no interior locking.

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::reducer::{reduce, CartAction, CartSeed, Reduced, Transition};
use crate::types::{Direction, Item, ItemId};
use crate::view::{CartTotals, CartView};

/// The shopping cart state container.
#[derive(Debug, Clone)]
pub struct CartStore {
    seed: CartSeed,
    cart: Cart,
}

impl CartStore {
    /// Builds a store from bootstrap data, validating it first.
    ///
    /// ## Errors
    /// Duplicate ids, blank names, a zero cap, or initial counts summing
    /// above `max_quantity`.
    pub fn new(initial_items: Vec<Item>, max_quantity: u32) -> CoreResult<Self> {
        Ok(Self::from_seed(CartSeed::new(initial_items, max_quantity)?))
    }

    /// Builds a store whose cap is [`crate::DEFAULT_MAXIMUM_ITEM_QUANTITY`].
    pub fn with_default_maximum(initial_items: Vec<Item>) -> CoreResult<Self> {
        Ok(Self::from_seed(CartSeed::with_default_maximum(initial_items)?))
    }

    pub fn from_seed(seed: CartSeed) -> Self {
        let cart = seed.fresh_cart();
        CartStore { seed, cart }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Applies any [`CartAction`].
    pub fn dispatch(&mut self, action: CartAction) -> Transition {
        let current = std::mem::take(&mut self.cart);
        let Reduced { cart, transition } = reduce(&self.seed, current, &action);
        self.cart = cart;
        transition
    }

    /// Moves the count of `id` one step in `direction`.
    pub fn update_quantity(&mut self, id: &ItemId, direction: Direction) -> Transition {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.clone(),
            direction,
        })
    }

    pub fn increase(&mut self, id: &ItemId) -> Transition {
        self.update_quantity(id, Direction::Increase)
    }

    pub fn decrease(&mut self, id: &ItemId) -> Transition {
        self.update_quantity(id, Direction::Decrease)
    }

    /// Deletes the line with `id`. It stays gone until [`CartStore::reset`].
    pub fn remove(&mut self, id: &ItemId) -> Transition {
        self.dispatch(CartAction::Remove { id: id.clone() })
    }

    /// Restores the bootstrap item list.
    pub fn reset(&mut self) -> Transition {
        self.dispatch(CartAction::Reset)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[Item] {
        self.cart.items()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.cart.get(id)
    }

    /// Sum of all counts.
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Lines with `count > 0`.
    pub fn items_in_cart_count(&self) -> usize {
        self.cart.items_in_cart_count()
    }

    pub fn max_quantity(&self) -> u32 {
        self.seed.max_quantity()
    }

    pub fn remaining_capacity(&self) -> u64 {
        u64::from(self.max_quantity()).saturating_sub(self.total_quantity())
    }

    /// True when every increase would be refused.
    pub fn is_at_capacity(&self) -> bool {
        self.remaining_capacity() == 0
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.cart, self.max_quantity())
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> CartView {
        CartView::new(&self.cart, self.max_quantity())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::reducer::Rejection;

    fn test_store() -> CartStore {
        CartStore::new(
            vec![Item::new(1, "Apple", 0), Item::new(2, "Bread", 2)],
            20,
        )
        .unwrap()
    }

    fn id(n: u32) -> ItemId {
        ItemId::from(n)
    }

    #[test]
    fn test_walkthrough() {
        let mut store = test_store();

        assert!(store.increase(&id(1)).is_applied());
        assert_eq!(store.get(&id(1)).unwrap().count, 1);
        assert_eq!(store.total_quantity(), 3);
        assert_eq!(store.items_in_cart_count(), 2);

        assert!(store.decrease(&id(2)).is_applied());
        assert!(store.decrease(&id(2)).is_applied());
        assert_eq!(store.get(&id(2)).unwrap().count, 0);
        assert_eq!(
            store.decrease(&id(2)),
            Transition::Ignored(Rejection::WouldGoNegative { id: id(2) })
        );
        assert_eq!(store.get(&id(2)).unwrap().count, 0);
        assert_eq!(store.items_in_cart_count(), 1);

        assert!(store.remove(&id(2)).is_applied());
        assert_eq!(store.items(), &[Item::new(1, "Apple", 1)]);
        assert_eq!(store.total_quantity(), 1);

        assert!(store.reset().is_applied());
        assert_eq!(
            store.items(),
            &[Item::new(1, "Apple", 0), Item::new(2, "Bread", 2)]
        );
    }

    #[test]
    fn test_removed_item_is_inert_until_reset() {
        let mut store = test_store();
        store.remove(&id(2)).into_result().unwrap();
        let after_remove = store.cart().clone();

        for transition in [
            store.increase(&id(2)),
            store.decrease(&id(2)),
            store.remove(&id(2)),
        ] {
            assert_eq!(
                transition.rejection(),
                Some(&Rejection::NotFound { id: id(2) })
            );
        }
        assert_eq!(store.cart(), &after_remove);

        store.reset().into_result().unwrap();
        assert!(store.increase(&id(2)).is_applied());
        assert_eq!(store.get(&id(2)).unwrap().count, 3);
    }

    #[test]
    fn test_capacity_helpers() {
        let mut store = CartStore::new(vec![Item::new(1, "Apple", 19)], 20).unwrap();
        assert_eq!(store.remaining_capacity(), 1);
        assert!(!store.is_at_capacity());

        assert!(store.increase(&id(1)).is_applied());
        assert!(store.is_at_capacity());
        assert_eq!(
            store.increase(&id(1)),
            Transition::Ignored(Rejection::CapacityReached { max: 20 })
        );
        assert_eq!(store.total_quantity(), 20);
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let mut direct = test_store();
        let mut dispatched = test_store();

        let _ = direct.increase(&id(1));
        let _ = direct.remove(&id(2));
        let _ = dispatched.dispatch(CartAction::increase(1));
        let _ = dispatched.dispatch(CartAction::remove(2));

        assert_eq!(direct.cart(), dispatched.cart());
    }

    #[test]
    fn test_view_reflects_state() {
        let mut store = test_store();
        let _ = store.increase(&id(1));

        let view = store.view();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.totals, store.totals());
        assert_eq!(view.totals.total_quantity, 3);
        assert_eq!(view.totals.remaining_capacity, 17);
    }

    #[test]
    fn test_store_starts_from_seed_cart() {
        let seed = CartSeed::new(vec![Item::new(1, "Apple", 0), Item::new(2, "Bread", 2)], 20)
            .unwrap();
        let mut store = CartStore::from_seed(seed.clone());
        assert_eq!(store.cart(), &seed.fresh_cart());

        let _ = store.increase(&id(1));
        let _ = store.reset();
        assert_eq!(store.cart(), &seed.fresh_cart());
    }

    #[test]
    fn test_default_maximum() {
        let store = CartStore::with_default_maximum(vec![Item::new(1, "Apple", 0)]).unwrap();
        assert_eq!(store.max_quantity(), crate::DEFAULT_MAXIMUM_ITEM_QUANTITY);
    }

    #[test]
    fn test_new_rejects_bad_bootstrap() {
        let dup = CartStore::new(vec![Item::new(1, "Apple", 0), Item::new(1, "Pear", 0)], 20);
        assert!(matches!(dup, Err(CoreError::Validation(_))));

        let over = CartStore::new(vec![Item::new(1, "Apple", 21)], 20);
        assert!(matches!(over, Err(CoreError::CapacityExceeded { .. })));
    }
}
