//! User trading settings
//!
//! Persisted across sessions; loaded on start and saved on every change.

use crate::storage::{KeyValueStore, StorageError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage key for persisted settings
pub const SETTINGS_KEY: &str = "goldtrackr-settings";

/// Exchange that receives orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    #[default]
    Coinbase,
    Kraken,
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coinbase => write!(f, "coinbase"),
            Self::Kraken => write!(f, "kraken"),
        }
    }
}

/// User-controlled trading settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSettings {
    pub exchange: Exchange,
    pub auto_trade_enabled: bool,
    /// Orders are validated and logged but never sent
    pub dry_run: bool,
    /// Maximum order size in troy ounces
    pub max_trade_size: Decimal,
    pub daily_loss_limit_pct: Decimal,
}

impl TradingSettings {
    /// Load persisted settings, or fall back to `initial`
    pub fn load_or<S: KeyValueStore>(store: &S, initial: TradingSettings) -> Self {
        match store.load::<TradingSettings>(SETTINGS_KEY) {
            Ok(Some(settings)) => settings,
            Ok(None) => initial,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load settings, using defaults");
                initial
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), StorageError> {
        store.save(SETTINGS_KEY, self)
    }

    /// Update the max trade size; non-positive values are ignored
    pub fn set_max_trade_size(&mut self, size: Decimal) -> bool {
        if size <= Decimal::ZERO {
            return false;
        }
        self.max_trade_size = size;
        true
    }
}
