//! # Cart View
//!
//! The read model handed to the presentation layer after each mutation.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Total Items in Cart: 2      Total Qty: 3    │  ← CartTotals
//! ├──────────────────────────────────────────────┤
//! │  Apple - 1        [+] [-] [Remove]           │  ← items
//! │  Bread - 2        [+] [-] [Remove]           │
//! ├──────────────────────────────────────────────┤
//! │  [Reset]                                     │
//! └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::types::Item;

/// Derived counters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of all counts.
    #[ts(type = "number")]
    pub total_quantity: u64,
    /// Lines with a positive count.
    pub items_in_cart_count: usize,
    /// Cart-wide cap.
    pub max_quantity: u32,
    /// Units that can still be added before increases are refused.
    #[ts(type = "number")]
    pub remaining_capacity: u64,
}

impl CartTotals {
    pub fn compute(cart: &Cart, max_quantity: u32) -> Self {
        let total_quantity = cart.total_quantity();

        CartTotals {
            total_quantity,
            items_in_cart_count: cart.items_in_cart_count(),
            max_quantity,
            remaining_capacity: u64::from(max_quantity).saturating_sub(total_quantity),
        }
    }
}

/// Items plus totals, in one serializable snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<Item>,
    pub totals: CartTotals,
}

impl CartView {
    pub fn new(cart: &Cart, max_quantity: u32) -> Self {
        CartView {
            items: cart.items().to_vec(),
            totals: CartTotals::compute(cart, max_quantity),
        }
    }
}
