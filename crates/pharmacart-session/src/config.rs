//! # Cart Configuration
//!
//! Static catalog data for the cart screen: fulfillment options, promotion
//! allow-list, products and the initial cart contents.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PHARMACART_DEFAULT_FULFILLMENT=pickup                              │
//! │     PHARMACART_CURRENCY_SYMBOL=₦                                       │
//! │     PHARMACART_CURRENCY_DECIMALS=2                                     │
//! │                                                                         │
//! │  2. Config File (TOML, or JSON when the extension is .json)            │
//! │     explicit path > $PHARMACART_CONFIG >                               │
//! │     ~/.config/pharmacart/cart.toml (Linux)                             │
//! │     ~/Library/Application Support/com.pharmacart.app/cart.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     The storefront's delivery options, SAVE10, three products          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [currency]
//! symbol = "₦"
//! decimals = 2
//!
//! [fulfillment]
//! default = "express"
//!
//! [[fulfillment.options]]
//! id = "express"
//! name = "Express Delivery"
//! eta = "20-30 mins"
//! icon = "flash"
//! flatFee = 500
//!
//! [[promotions]]
//! code = "SAVE10"
//! rate = 1000   # basis points
//!
//! [[products]]
//! id = "1"
//! name = "Zyncet Cetrizine 10Mg X50"
//! unitPrice = 2450
//!
//! [[cart.seed]]
//! productId = "1"
//! quantity = 2
//! ```

use std::path::{Path, PathBuf};

use pharmacart_core::{
    DiscountRate, FulfillmentIcon, FulfillmentOption, LedgerConfig, LineItem, Money, Promotion,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{Product, ProductCatalog};
use crate::error::{SessionError, SessionResult};
use crate::format::CurrencyFormat;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PHARMACART_CONFIG";

// =============================================================================
// Fulfillment Settings
// =============================================================================

/// Fulfillment catalog and the option selected when a cart opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentSettings {
    #[serde(default = "default_fulfillment_id")]
    pub default: String,

    #[serde(default = "default_fulfillment_options")]
    pub options: Vec<FulfillmentOption>,
}

fn default_fulfillment_id() -> String {
    "express".to_string()
}

fn default_fulfillment_options() -> Vec<FulfillmentOption> {
    vec![
        FulfillmentOption {
            id: "express".to_string(),
            name: "Express Delivery".to_string(),
            eta: "20-30 mins".to_string(),
            icon: FulfillmentIcon::Flash,
            flat_fee: Money::from_minor(500),
        },
        FulfillmentOption {
            id: "standard".to_string(),
            name: "Standard Delivery".to_string(),
            eta: "1-2 hours".to_string(),
            icon: FulfillmentIcon::Time,
            flat_fee: Money::from_minor(200),
        },
        FulfillmentOption {
            id: "pickup".to_string(),
            name: "Store Pickup".to_string(),
            eta: "Ready in 15 mins".to_string(),
            icon: FulfillmentIcon::Location,
            flat_fee: Money::zero(),
        },
    ]
}

impl Default for FulfillmentSettings {
    fn default() -> Self {
        FulfillmentSettings {
            default: default_fulfillment_id(),
            options: default_fulfillment_options(),
        }
    }
}

// =============================================================================
// Cart Settings
// =============================================================================

/// One product/quantity pair the cart starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEntry {
    pub product_id: String,
    pub quantity: u32,
}

/// Initial cart contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSettings {
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedEntry>,
}

fn default_seed() -> Vec<SeedEntry> {
    [("1", 2), ("2", 1), ("3", 1)]
        .into_iter()
        .map(|(product_id, quantity)| SeedEntry {
            product_id: product_id.to_string(),
            quantity,
        })
        .collect()
}

impl Default for CartSettings {
    fn default() -> Self {
        CartSettings {
            seed: default_seed(),
        }
    }
}

fn default_promotions() -> Vec<Promotion> {
    vec![Promotion::new("SAVE10", DiscountRate::from_bps(1000))]
}

fn default_products() -> Vec<Product> {
    vec![
        Product::new("1", "Zyncet Cetrizine 10Mg X50", Money::from_minor(2450)),
        Product::new("2", "Paracetamol 500mg Tablets", Money::from_minor(850)),
        Product {
            prescription_required: true,
            ..Product::new("3", "Amoxicillin 250mg Capsules", Money::from_minor(3200))
        },
    ]
}

// =============================================================================
// Main Cart Configuration
// =============================================================================

/// Complete cart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default)]
    pub currency: CurrencyFormat,

    #[serde(default = "default_promotions")]
    pub promotions: Vec<Promotion>,

    #[serde(default = "default_products")]
    pub products: Vec<Product>,

    #[serde(default)]
    pub fulfillment: FulfillmentSettings,

    #[serde(default)]
    pub cart: CartSettings,
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            currency: CurrencyFormat::default(),
            promotions: default_promotions(),
            products: default_products(),
            fulfillment: FulfillmentSettings::default(),
            cart: CartSettings::default(),
        }
    }
}

impl CartConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading cart config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        info!(
            options = config.fulfillment.options.len(),
            promotions = config.promotions.len(),
            products = config.products.len(),
            "Cart config loaded"
        );
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cart config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file, choosing JSON or TOML by extension.
    pub fn from_file(path: &Path) -> SessionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&contents)
                .map_err(|e| SessionError::ConfigLoadFailed(e.to_string()))
        } else {
            Ok(toml::from_str(&contents)?)
        }
    }

    /// Saves configuration as TOML.
    pub fn save(&self, config_path: Option<PathBuf>) -> SessionResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SessionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Cart config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SessionResult<()> {
        self.ledger_config()?;
        let catalog = self.catalog()?;

        for entry in &self.cart.seed {
            if catalog.get(&entry.product_id).is_none() {
                return Err(SessionError::InvalidConfig(format!(
                    "cart seed references unknown product '{}'",
                    entry.product_id
                )));
            }
        }

        Ok(())
    }

    /// Builds the validated core configuration for a `CartLedger`.
    pub fn ledger_config(&self) -> SessionResult<LedgerConfig> {
        Ok(LedgerConfig::new(
            self.fulfillment.options.clone(),
            self.fulfillment.default.clone(),
            self.promotions.clone(),
        )?)
    }

    /// Builds the validated product catalog.
    pub fn catalog(&self) -> SessionResult<ProductCatalog> {
        ProductCatalog::new(self.products.clone())
    }

    /// Resolves the seed entries to line items at catalog prices.
    ///
    /// Entries for unknown products are skipped with a warning.
    pub fn seed_items(&self, catalog: &ProductCatalog) -> Vec<LineItem> {
        self.cart
            .seed
            .iter()
            .filter_map(|entry| match catalog.get(&entry.product_id) {
                Some(product) => Some(LineItem::new(
                    product.id.clone(),
                    product.unit_price,
                    entry.quantity,
                )),
                None => {
                    warn!(product_id = %entry.product_id, "Skipping seed for unknown product");
                    None
                }
            })
            .collect()
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(id) = std::env::var("PHARMACART_DEFAULT_FULFILLMENT") {
            debug!(option_id = %id, "Overriding default fulfillment from environment");
            self.fulfillment.default = id;
        }

        if let Ok(symbol) = std::env::var("PHARMACART_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }

        if let Ok(decimals) = std::env::var("PHARMACART_CURRENCY_DECIMALS") {
            match decimals.parse::<u8>() {
                Ok(d) => self.currency = CurrencyFormat::new(self.currency.symbol.clone(), d),
                Err(_) => warn!(value = %decimals, "Ignoring invalid currency decimals"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pharmacart", "app")
            .map(|dirs| dirs.config_dir().join("cart.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
