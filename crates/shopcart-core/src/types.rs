//! # Domain Types
//!
//! Core domain types shared by the cart, the reducer and the store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     ItemId      │   │      Item       │   │   Direction     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Number(u32)    │   │  id (ItemId)    │   │  Increase       │       │
//! │  │  Text(String)   │   │  name           │   │  Decrease       │       │
//! │  │                 │   │  count (u32)    │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are assigned by whoever supplies the initial item list and never
//! change afterwards. `count` is unsigned, so a negative quantity cannot be
//! represented at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Item Id
// =============================================================================

/// Stable identifier of a cart line.
///
/// Bootstrap data may use either integers or strings, so both are accepted.
/// Serialized untagged: `1` and `"bread-loaf"` are both valid ids.
///
/// `Number(1)` and `Text("1")` are distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ItemId {
    Number(u32),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

// =============================================================================
// Item
// =============================================================================

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique, immutable identifier.
    pub id: ItemId,

    /// Display label.
    pub name: String,

    /// Quantity currently in the cart.
    pub count: u32,
}

impl Item {
    /// Creates an item.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, count: u32) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            count,
        }
    }

    /// Returns a copy of this item carrying a different count.
    ///
    /// Transitions never edit an item in place; they swap in the copy.
    #[must_use]
    pub fn with_count(&self, count: u32) -> Self {
        Item {
            count,
            ..self.clone()
        }
    }

    /// True when the item contributes to the "items in cart" counter.
    ///
    /// A line with `count == 0` stays listed but is not "in the cart".
    #[inline]
    pub fn is_in_cart(&self) -> bool {
        self.count > 0
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Which way a quantity update moves the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Add one unit (subject to the cart-wide cap).
    Increase,
    /// Remove one unit (never below zero).
    Decrease,
}

impl Direction {
    /// Applies the direction to a count.
    ///
    /// Returns `None` when the result would leave the `u32` range, i.e. a
    /// decrease below zero.
    pub fn apply(self, count: u32) -> Option<u32> {
        match self {
            Direction::Increase => count.checked_add(1),
            Direction::Decrease => count.checked_sub(1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Increase => write!(f, "increase"),
            Direction::Decrease => write!(f, "decrease"),
        }
    }
}

/// Returned when a string does not name a [`Direction`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown direction: '{0}'. Valid options: increase, decrease")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "increase" | "+" => Ok(Direction::Increase),
            "decrease" | "-" => Ok(Direction::Decrease),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
