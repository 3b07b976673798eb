//! # Validation Module
//!
//! Checks applied once to bootstrap data, before a cart store exists.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Bootstrap file / env (shopcart-bootstrap)                    │
//! │  ├── Type validation (TOML deserialization)                            │
//! │  └── Negative counts rejected by the u32 field type                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CartSeed::new (THIS MODULE)                                  │
//! │  ├── Names non-empty, bounded length                                   │
//! │  ├── Ids unique                                                        │
//! │  └── max > 0, initial total <= max                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer guards                                               │
//! │  └── Per-transition no-ops (capacity, non-negative, not found)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::{validate_initial_items, validate_max_quantity};
//! use shopcart_core::Item;
//!
//! validate_max_quantity(20).unwrap();
//!
//! let items = vec![Item::new(1, "Apple", 0), Item::new(2, "Bread", 2)];
//! validate_initial_items(&items, 20).unwrap();
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Item;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted display name, in characters after trimming.
pub const MAX_ITEM_NAME_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_ITEM_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Apple").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the cart-wide quantity cap. Zero would make every increase a
/// no-op, so it is refused.
pub fn validate_max_quantity(max: u32) -> ValidationResult<()> {
    if max == 0 {
        return Err(ValidationError::MustBePositive {
            field: "max_quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that no two items share an id.
pub fn validate_unique_ids(items: &[Item]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if !seen.insert(&item.id) {
            return Err(ValidationError::Duplicate {
                field: "item id".to_string(),
                value: item.id.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a complete bootstrap item list against the cap.
///
/// ## Rules
/// - `max` is positive
/// - Every name passes [`validate_item_name`]
/// - Ids are unique
/// - Sum of counts does not exceed `max`
pub fn validate_initial_items(items: &[Item], max: u32) -> CoreResult<()> {
    validate_max_quantity(max)?;

    for item in items {
        validate_item_name(&item.name)?;
    }

    validate_unique_ids(items)?;

    let total: u64 = items.iter().map(|item| u64::from(item.count)).sum();
    if total > u64::from(max) {
        return Err(CoreError::CapacityExceeded { total, max });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Apple").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_item_name_counts_characters() {
        // 100 chars, 300 bytes
        assert!(validate_item_name(&"苹".repeat(100)).is_ok());
        assert!(validate_item_name(&"苹".repeat(MAX_ITEM_NAME_LEN)).is_ok());
        assert!(matches!(
            validate_item_name(&"苹".repeat(MAX_ITEM_NAME_LEN + 1)),
            Err(ValidationError::TooLong { max: MAX_ITEM_NAME_LEN, .. })
        ));
    }

    #[test]
    fn test_validate_max_quantity() {
        assert!(validate_max_quantity(1).is_ok());
        assert!(validate_max_quantity(20).is_ok());
        assert!(matches!(
            validate_max_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_unique_ids() {
        let ok = vec![Item::new(1, "Apple", 0), Item::new("1", "Text one", 0)];
        assert!(validate_unique_ids(&ok).is_ok());

        let dup = vec![Item::new(1, "Apple", 0), Item::new(1, "Bread", 2)];
        match validate_unique_ids(&dup) {
            Err(ValidationError::Duplicate { value, .. }) => assert_eq!(value, "1"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_initial_items_capacity() {
        let items = vec![Item::new(1, "Apple", 15), Item::new(2, "Bread", 5)];
        assert!(validate_initial_items(&items, 20).is_ok());

        let over = vec![Item::new(1, "Apple", 15), Item::new(2, "Bread", 8)];
        assert!(matches!(
            validate_initial_items(&over, 20),
            Err(CoreError::CapacityExceeded { total: 23, max: 20 })
        ));
    }

    #[test]
    fn test_validate_initial_items_empty_list() {
        assert!(validate_initial_items(&[], 20).is_ok());
    }

    #[test]
    fn test_validate_initial_items_rejects_blank_name() {
        let items = vec![Item::new(1, "", 0)];
        assert!(matches!(
            validate_initial_items(&items, 20),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }
}
