//! # shopcart-core: Pure Shopping Cart State Transitions
//!
//! This crate holds the cart's state and the rules that change it. It has
//! no I/O: no files, no network, no environment access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation layer (outside this repo)             │   │
//! │  │     renders items + counters, forwards [+] [-] Remove Reset    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartAction / CartView                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopcart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  reducer  │  │   store   │  │   │
//! │  │   │   Item    │  │   Cart    │  │  reduce   │  │ CartStore │  │   │
//! │  │   │  ItemId   │  │  totals   │  │ CartSeed  │  │  view()   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • PURE TRANSITIONS                         │   │
//! │  └─────────────────────────────▲───────────────────────────────────┘   │
//! │                                │ initial items + max quantity           │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              shopcart-bootstrap (TOML, env, tracing)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `ItemId`, `Item`, `Direction`
//! - [`cart`] - Ordered item list and derived totals
//! - [`reducer`] - `reduce(seed, cart, action)` and transition outcomes
//! - [`store`] - `CartStore`, the state container
//! - [`view`] - Serializable snapshot for rendering
//! - [`validation`] - Bootstrap data checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{CartStore, Item, ItemId};
//!
//! let mut store = CartStore::new(
//!     vec![Item::new(1, "Apple", 0), Item::new(2, "Bread", 2)],
//!     20,
//! )
//! .unwrap();
//!
//! let apple = ItemId::from(1);
//! let bread = ItemId::from(2);
//!
//! let _ = store.increase(&apple);
//! assert_eq!(store.total_quantity(), 3);
//! assert_eq!(store.items_in_cart_count(), 2);
//!
//! let _ = store.decrease(&bread);
//! let _ = store.decrease(&bread);
//! assert!(!store.decrease(&bread).is_applied()); // already at zero
//! assert_eq!(store.items_in_cart_count(), 1);
//!
//! let _ = store.remove(&bread);
//! assert_eq!(store.items(), &[Item::new(1, "Apple", 1)]);
//! assert_eq!(store.total_quantity(), 1);
//!
//! let _ = store.reset();
//! assert_eq!(
//!     store.items(),
//!     &[Item::new(1, "Apple", 0), Item::new(2, "Bread", 2)]
//! );
//! ```
//!
//! The cap is shared by every line:
//!
//! ```rust
//! use shopcart_core::{CartStore, Item, ItemId, Rejection, Transition};
//!
//! let mut store = CartStore::new(vec![Item::new(1, "Apple", 20)], 20).unwrap();
//! assert_eq!(
//!     store.increase(&ItemId::from(1)),
//!     Transition::Ignored(Rejection::CapacityReached { max: 20 })
//! );
//! assert_eq!(store.total_quantity(), 20);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod reducer;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

#[cfg(test)]
mod proptests;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use reducer::{reduce, CartAction, CartSeed, Reduced, Rejection, Transition};
pub use store::CartStore;
pub use types::{Direction, Item, ItemId, ParseDirectionError};
pub use view::{CartTotals, CartView};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cart-wide quantity cap used when the bootstrap data does not name one.
///
/// The cap bounds the sum of all counts, not any single line.
pub const DEFAULT_MAXIMUM_ITEM_QUANTITY: u32 = 20;
