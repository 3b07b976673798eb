//! # Cart Reducer
//!
//! Every cart mutation is a pure function `(seed, cart, action) → cart`.
//!
//! ## Transition Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    reduce(seed, cart, action)                           │
//! │                                                                         │
//! │  UpdateQuantity { id, Increase }                                       │
//! │    total >= max ? ───────────────────────► Ignored(CapacityReached)    │
//! │    id missing ?  ───────────────────────► Ignored(NotFound)            │
//! │    count + 1     ───────────────────────► Applied                      │
//! │                                                                         │
//! │  UpdateQuantity { id, Decrease }                                       │
//! │    id missing ?  ───────────────────────► Ignored(NotFound)            │
//! │    count == 0 ?  ───────────────────────► Ignored(WouldGoNegative)     │
//! │    count - 1     ───────────────────────► Applied  (line stays at 0)   │
//! │                                                                         │
//! │  Remove { id }                                                         │
//! │    id missing ?  ───────────────────────► Ignored(NotFound)            │
//! │    drop line, keep order ───────────────► Applied                      │
//! │                                                                         │
//! │  Reset           ───────────────────────► Applied  (copy of seed)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The capacity guard compares the cart-wide total, not the target line,
//! and runs before the id lookup. An ignored action hands back the cart it
//! was given, untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::types::{Direction, Item, ItemId};
use crate::validation::validate_initial_items;
use crate::DEFAULT_MAXIMUM_ITEM_QUANTITY;

// =============================================================================
// Seed
// =============================================================================

/// Validated bootstrap baseline: the initial lines and the quantity cap.
///
/// Reset always produces a fresh clone of `initial`, so nothing done to a
/// live cart can leak back into the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSeed {
    initial: Cart,
    max_quantity: u32,
}

impl CartSeed {
    /// Validates and captures the bootstrap data.
    pub fn new(initial_items: Vec<Item>, max_quantity: u32) -> CoreResult<Self> {
        validate_initial_items(&initial_items, max_quantity)?;

        Ok(CartSeed {
            initial: Cart::new(initial_items),
            max_quantity,
        })
    }

    /// Same as [`CartSeed::new`] with [`DEFAULT_MAXIMUM_ITEM_QUANTITY`].
    pub fn with_default_maximum(initial_items: Vec<Item>) -> CoreResult<Self> {
        Self::new(initial_items, DEFAULT_MAXIMUM_ITEM_QUANTITY)
    }

    pub fn initial_items(&self) -> &[Item] {
        self.initial.items()
    }

    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// A new cart equal to the bootstrap state.
    pub fn fresh_cart(&self) -> Cart {
        self.initial.clone()
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A user intent forwarded by the presentation layer.
///
/// ## Wire Format
/// ```json
/// { "type": "updateQuantity", "id": 1, "direction": "increase" }
/// { "type": "remove", "id": "bread-loaf" }
/// { "type": "reset" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CartAction {
    UpdateQuantity { id: ItemId, direction: Direction },
    Remove { id: ItemId },
    Reset,
}

impl CartAction {
    pub fn increase(id: impl Into<ItemId>) -> Self {
        CartAction::UpdateQuantity {
            id: id.into(),
            direction: Direction::Increase,
        }
    }

    pub fn decrease(id: impl Into<ItemId>) -> Self {
        CartAction::UpdateQuantity {
            id: id.into(),
            direction: Direction::Decrease,
        }
    }

    pub fn remove(id: impl Into<ItemId>) -> Self {
        CartAction::Remove { id: id.into() }
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// Why an action left the cart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, TS)]
#[ts(export)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum Rejection {
    /// The cart-wide total already sits at the cap.
    #[error("Cart already holds the maximum of {max} units")]
    CapacityReached { max: u32 },

    /// A decrease on a line whose count is already zero.
    #[error("Quantity of item {id} cannot go below zero")]
    WouldGoNegative { id: ItemId },

    /// No line with this id (never existed, or removed since the last reset).
    #[error("Item {id} is not in the cart")]
    NotFound { id: ItemId },
}

/// Result of applying one action.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State was replaced.
    Applied,
    /// Precondition not met; state is exactly what it was.
    Ignored(Rejection),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Transition::Applied => None,
            Transition::Ignored(rejection) => Some(rejection),
        }
    }

    /// Converts to a `Result` for callers that want `?`.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Transition::Applied => Ok(()),
            Transition::Ignored(rejection) => Err(rejection),
        }
    }
}

/// New cart state together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduced {
    pub cart: Cart,
    pub transition: Transition,
}

impl Reduced {
    fn applied(cart: Cart) -> Self {
        Reduced {
            cart,
            transition: Transition::Applied,
        }
    }

    fn ignored(cart: Cart, rejection: Rejection) -> Self {
        Reduced {
            cart,
            transition: Transition::Ignored(rejection),
        }
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies `action` to `cart`.
///
/// Never panics and never fails: a refused action returns the input cart
/// with [`Transition::Ignored`].
pub fn reduce(seed: &CartSeed, cart: Cart, action: &CartAction) -> Reduced {
    let reduced = match action {
        CartAction::UpdateQuantity { id, direction } => {
            update_quantity(cart, id, *direction, seed.max_quantity)
        }
        CartAction::Remove { id } => remove(cart, id),
        CartAction::Reset => Reduced::applied(seed.fresh_cart()),
    };

    match &reduced.transition {
        Transition::Applied => debug!(
            ?action,
            total_quantity = reduced.cart.total_quantity(),
            "cart transition applied"
        ),
        Transition::Ignored(rejection) => {
            debug!(?action, reason = %rejection, "cart transition ignored")
        }
    }

    reduced
}

fn update_quantity(mut cart: Cart, id: &ItemId, direction: Direction, max: u32) -> Reduced {
    if direction == Direction::Increase && cart.total_quantity() >= u64::from(max) {
        return Reduced::ignored(cart, Rejection::CapacityReached { max });
    }

    let Some(index) = cart.position(id) else {
        return Reduced::ignored(cart, Rejection::NotFound { id: id.clone() });
    };

    let current = &cart.items()[index];
    let Some(new_count) = direction.apply(current.count) else {
        let rejection = match direction {
            Direction::Decrease => Rejection::WouldGoNegative { id: id.clone() },
            Direction::Increase => Rejection::CapacityReached { max },
        };
        return Reduced::ignored(cart, rejection);
    };

    let updated = current.with_count(new_count);
    cart.replace(index, updated);
    Reduced::applied(cart)
}

fn remove(mut cart: Cart, id: &ItemId) -> Reduced {
    match cart.position(id) {
        Some(index) => {
            cart.remove_at(index);
            Reduced::applied(cart)
        }
        None => Reduced::ignored(cart, Rejection::NotFound { id: id.clone() }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
