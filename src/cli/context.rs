//! Wiring shared by the subcommands

use crate::config::Config;
use crate::execution::{DryRunSubmitter, OrderSubmitter, RelaySubmitter};
use crate::feed::{HttpPriceSource, PriceSource, StaticPriceSource};
use crate::monitor::Dashboard;
use crate::portfolio::Portfolio;
use crate::settings::TradingSettings;
use crate::storage::JsonFileStore;
use std::sync::Arc;
use std::time::Duration;

/// Configuration plus the persistent store it points at
pub struct AppContext {
    pub config: Config,
    pub store: JsonFileStore,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let store = JsonFileStore::new(config.storage.data_dir.clone());
        Self { config, store }
    }

    /// Persisted settings, seeded from `[trading]` on first use
    pub fn settings(&self) -> TradingSettings {
        TradingSettings::load_or(&self.store, self.config.trading.initial_settings())
    }

    /// Holdings for display; unreadable data shows as empty
    pub fn portfolio(&self) -> Portfolio {
        Portfolio::load_or_empty(&self.store)
    }

    /// Holdings about to be modified and saved; unreadable data is an error
    pub fn portfolio_for_update(&self) -> anyhow::Result<Portfolio> {
        Portfolio::load(&self.store).map_err(|e| {
            anyhow::anyhow!(
                "Portfolio file in {} is unreadable ({}); fix or move it before editing holdings",
                self.config.storage.data_dir.display(),
                e
            )
        })
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(&self.config, self.settings(), self.portfolio())
    }

    /// Live HTTP source, or the static dataset when `offline`
    pub fn price_source(&self, offline: bool) -> anyhow::Result<Arc<dyn PriceSource>> {
        if offline {
            tracing::info!("Offline mode, serving static prices");
            return Ok(Arc::new(StaticPriceSource));
        }
        Ok(Arc::new(HttpPriceSource::from_config(&self.config.feed)?))
    }

    /// Relay when configured, otherwise an in-process dry run
    pub fn submitter(&self, settings: &TradingSettings) -> anyhow::Result<Arc<dyn OrderSubmitter>> {
        match &self.config.trading.relay_url {
            Some(url) => {
                let timeout = Duration::from_secs(self.config.feed.timeout_secs);
                Ok(Arc::new(RelaySubmitter::new(url.clone(), timeout)?))
            }
            None => {
                if !settings.dry_run {
                    tracing::warn!("No relay_url configured, orders will not leave this process");
                }
                Ok(Arc::new(DryRunSubmitter::new()))
            }
        }
    }
}
