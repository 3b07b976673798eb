//! # Cart Configuration
//!
//! Loads the initial item list and the quantity cap.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPCART_MAX_QUANTITY=30                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, else $SHOPCART_CONFIG, else                         │
//! │     ~/.config/shopcart/cart.toml (Linux)                               │
//! │     ~/Library/Application Support/com.shopcart.cart/cart.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     max_quantity = 20, built-in sample catalogue                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! max_quantity = 20
//!
//! [[items]]
//! id = 1
//! name = "Apple"
//! count = 0
//!
//! [[items]]
//! id = "bread-loaf"
//! name = "Bread"
//! count = 2
//! ```
//!
//! `count` may be omitted and defaults to 0. If `items` is omitted, the
//! built-in catalogue is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shopcart_core::{CartSeed, CartStore, Item, ItemId, DEFAULT_MAXIMUM_ITEM_QUANTITY};
use tracing::{debug, info, warn};

use crate::error::{BootstrapError, BootstrapResult};

/// Names a config file to load when no explicit path is given.
pub const CONFIG_PATH_ENV: &str = "SHOPCART_CONFIG";

/// Overrides `max_quantity`.
pub const MAX_QUANTITY_ENV: &str = "SHOPCART_MAX_QUANTITY";

const CONFIG_FILE_NAME: &str = "cart.toml";

// =============================================================================
// Item Configuration
// =============================================================================

/// One `[[items]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: ItemId,

    pub name: String,

    /// Starting quantity.
    #[serde(default)]
    pub count: u32,
}

impl From<ItemConfig> for Item {
    fn from(config: ItemConfig) -> Self {
        Item::new(config.id, config.name, config.count)
    }
}

// =============================================================================
// Cart Configuration
// =============================================================================

/// Bootstrap data for a [`CartStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Cap on the sum of all counts.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: u32,

    /// Initial lines, in display order.
    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

fn default_max_quantity() -> u32 {
    DEFAULT_MAXIMUM_ITEM_QUANTITY
}

fn default_items() -> Vec<ItemConfig> {
    vec![
        ItemConfig {
            id: ItemId::Number(1),
            name: "Apple".to_string(),
            count: 0,
        },
        ItemConfig {
            id: ItemId::Number(2),
            name: "Bread".to_string(),
            count: 2,
        },
        ItemConfig {
            id: ItemId::Number(3),
            name: "Milk".to_string(),
            count: 0,
        },
    ]
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            max_quantity: default_max_quantity(),
            items: default_items(),
        }
    }
}

impl CartConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (cart.toml); a missing file is not an error
    /// 3. Environment variables
    ///
    /// The result is validated before it is returned.
    pub fn load(config_path: Option<PathBuf>) -> BootstrapResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cart config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn load_with<F>(config_path: Option<PathBuf>, env: F) -> BootstrapResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading cart config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Cart config file not found, using defaults");
            }
        }

        config.apply_env_overrides_with(env);
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML file. Does not validate.
    pub fn from_file(path: &Path) -> BootstrapResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text. Does not validate.
    pub fn from_toml_str(contents: &str) -> BootstrapResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> BootstrapResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks the data against the cart invariants.
    pub fn validate(&self) -> BootstrapResult<()> {
        self.to_seed().map(|_| ())
    }

    /// Builds the validated reset baseline.
    pub fn to_seed(&self) -> BootstrapResult<CartSeed> {
        let items = self.items.iter().cloned().map(Item::from).collect();
        Ok(CartSeed::new(items, self.max_quantity)?)
    }

    /// Consumes the config and builds a ready-to-use store.
    pub fn into_store(self) -> BootstrapResult<CartStore> {
        let seed = self.to_seed()?;
        info!(
            items = seed.initial_items().len(),
            max_quantity = seed.max_quantity(),
            "Cart store initialized"
        );
        Ok(CartStore::from_seed(seed))
    }

    fn apply_env_overrides_with<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(MAX_QUANTITY_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(max) => {
                    debug!(max_quantity = max, "Overriding max quantity from environment");
                    self.max_quantity = max;
                }
                Err(_) => warn!(value = %raw, "Ignoring unparsable {}", MAX_QUANTITY_ENV),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopcart", "cart")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
