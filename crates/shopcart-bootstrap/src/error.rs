//! # Bootstrap Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bootstrap Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   File access   │  │     Parsing     │  │   Cart data             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  Parse          │  │  Core (duplicate id,    │ │
//! │  │                 │  │  Serialize      │  │  blank name, over cap)  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use shopcart_core::CoreError;
use thiserror::Error;

/// Result type alias for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Anything that stops a cart store from being built.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The config file exists but could not be read.
    #[error("Failed to read cart config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`CartConfig`](crate::CartConfig).
    ///
    /// A negative `count` lands here: the field is unsigned.
    #[error("Failed to parse cart config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rendering the config back to TOML failed.
    #[error("Failed to serialize cart config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The parsed data breaks a cart invariant.
    #[error("Invalid cart data: {0}")]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: BootstrapError = CoreError::CapacityExceeded { total: 25, max: 20 }.into();
        assert!(matches!(err, BootstrapError::Core(_)));
        assert_eq!(
            err.to_string(),
            "Invalid cart data: Initial quantity 25 exceeds maximum allowed (20)"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let toml_err = toml::from_str::<toml::Value>("max_quantity = ").unwrap_err();
        let err: BootstrapError = toml_err.into();
        assert!(err.to_string().starts_with("Failed to parse cart config"));
    }
}
