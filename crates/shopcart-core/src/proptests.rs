//! Property tests for the cart transition rules.
//!
//! Random bootstrap lists are driven through random action sequences. Each
//! invariant is then checked after every single step.

use proptest::prelude::*;

use crate::{CartAction, CartSeed, CartStore, Item, ItemId, Transition};

// ============================================================================
// Strategies
// ============================================================================

/// Up to six lines with small counts, plus a cap at or above their sum.
fn arb_seed() -> impl Strategy<Value = CartSeed> {
    (prop::collection::vec(0u32..=5, 0..=6), 0u32..=10).prop_map(|(counts, headroom)| {
        let items: Vec<Item> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Item::new(i as u32, format!("Item {}", i), count))
            .collect();
        let total: u32 = counts.iter().sum();
        CartSeed::new(items, (total + headroom).max(1)).unwrap()
    })
}

/// Actions over ids `0..8`, so some target lines that do not exist.
fn arb_action() -> impl Strategy<Value = CartAction> {
    let id = 0u32..8;
    prop_oneof![
        4 => id.clone().prop_map(|n| CartAction::increase(n)),
        4 => id.clone().prop_map(|n| CartAction::decrease(n)),
        1 => id.prop_map(|n| CartAction::remove(n)),
        1 => Just(CartAction::Reset),
    ]
}

fn arb_actions(max_count: usize) -> impl Strategy<Value = Vec<CartAction>> {
    prop::collection::vec(arb_action(), 0..=max_count)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: no sequence of actions pushes the total above the cap.
    #[test]
    fn prop_total_never_exceeds_cap(seed in arb_seed(), actions in arb_actions(60)) {
        let max = u64::from(seed.max_quantity());
        let mut store = CartStore::from_seed(seed);

        for action in actions {
            let _ = store.dispatch(action);
            prop_assert!(store.total_quantity() <= max);
        }
    }

    /// Property: derived values always agree with the item list.
    #[test]
    fn prop_derived_values_consistent(seed in arb_seed(), actions in arb_actions(60)) {
        let mut store = CartStore::from_seed(seed);

        for action in actions {
            let _ = store.dispatch(action);
            let sum: u64 = store.items().iter().map(|i| u64::from(i.count)).sum();
            let in_cart = store.items().iter().filter(|i| i.count > 0).count();
            prop_assert_eq!(store.total_quantity(), sum);
            prop_assert_eq!(store.items_in_cart_count(), in_cart);
        }
    }

    /// Property: an ignored action leaves state byte-for-byte unchanged.
    #[test]
    fn prop_ignored_actions_do_not_mutate(seed in arb_seed(), actions in arb_actions(60)) {
        let mut store = CartStore::from_seed(seed);

        for action in actions {
            let before = store.cart().clone();
            if let Transition::Ignored(_) = store.dispatch(action) {
                prop_assert_eq!(store.cart(), &before);
            }
        }
    }

    /// Property: surviving lines keep their relative order.
    #[test]
    fn prop_order_is_preserved(seed in arb_seed(), actions in arb_actions(60)) {
        let mut store = CartStore::from_seed(seed.clone());
        let original: Vec<ItemId> = seed.initial_items().iter().map(|i| i.id.clone()).collect();

        for action in actions {
            let _ = store.dispatch(action);
            let current: Vec<ItemId> = store.items().iter().map(|i| i.id.clone()).collect();
            let expected: Vec<ItemId> = original
                .iter()
                .filter(|id| current.contains(id))
                .cloned()
                .collect();
            prop_assert_eq!(current, expected);
        }
    }

    /// Property: reset twice equals reset once equals bootstrap.
    #[test]
    fn prop_reset_is_idempotent(seed in arb_seed(), actions in arb_actions(40)) {
        let mut store = CartStore::from_seed(seed.clone());
        for action in actions {
            let _ = store.dispatch(action);
        }

        let _ = store.reset();
        let once = store.cart().clone();
        let _ = store.reset();

        prop_assert_eq!(store.cart(), &once);
        prop_assert_eq!(store.cart(), &seed.fresh_cart());
    }

    /// Property: after remove, nothing but reset brings the line back.
    #[test]
    fn prop_removal_is_permanent_until_reset(
        seed in arb_seed(),
        target in 0u32..8,
        actions in arb_actions(40),
    ) {
        let target = ItemId::from(target);
        let mut store = CartStore::from_seed(seed);
        let _ = store.remove(&target);

        for action in actions {
            let is_reset = action == CartAction::Reset;
            let _ = store.dispatch(action);
            if is_reset {
                break;
            }
            prop_assert!(store.get(&target).is_none());
        }
    }
}
