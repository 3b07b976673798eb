//! # shopcart-bootstrap: Starting Data for the Cart
//!
//! Supplies `shopcart-core` with what it cannot fetch itself: the initial
//! item list and the cart-wide quantity cap. Also installs the tracing
//! subscriber.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Startup                                      │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, shopcart crates at DEBUG; RUST_LOG overrides       │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults → cart.toml → SHOPCART_MAX_QUANTITY                      │
//! │                                                                         │
//! │  3. Validate & Build ─────────────────────────────────────────────────► │
//! │     • ids unique, names present, initial total <= max                   │
//! │     • CartStore handed to the presentation layer                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shopcart_bootstrap::{bootstrap, init_tracing};
//!
//! init_tracing();
//! let store = bootstrap(None).unwrap();
//! println!("{} units in cart", store.total_quantity());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{CartConfig, ItemConfig};
pub use error::{BootstrapError, BootstrapResult};
pub use telemetry::init_tracing;

use std::path::PathBuf;

use shopcart_core::CartStore;

/// Loads configuration and builds the cart store in one step.
///
/// `config_path` takes precedence over `$SHOPCART_CONFIG` and the platform
/// default location.
pub fn bootstrap(config_path: Option<PathBuf>) -> BootstrapResult<CartStore> {
    CartConfig::load(config_path)?.into_store()
}
