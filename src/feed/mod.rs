//! Price feed module
//!
//! Token quotes from CoinGecko, spot gold from MetalPriceAPI, a static
//! fallback dataset, and the snapshot store the signal engines read from.

mod coingecko;
pub mod fallback;
mod metalprice;
mod store;
mod types;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig, COINGECKO_API_URL};
pub use metalprice::{MetalPriceClient, METALPRICE_API_URL};
pub use store::PriceSnapshotStore;
pub use types::{
    FeedError, PriceQuote, ReferenceSpot, SparklinePoint, BITCOIN, BITCOIN_CASH, ETHEREUM,
    GOLD_SPOT, PAX_GOLD, TETHER_GOLD, TRACKED_ASSETS,
};

use crate::config::FeedConfig;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for price provider implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the latest quotes for all tracked assets
    async fn fetch_prices(&self) -> Result<HashMap<String, PriceQuote>, FeedError>;
    /// Fetch the spot gold reference
    async fn fetch_reference_spot(&self) -> Result<ReferenceSpot, FeedError>;
}

/// Live HTTP price source
///
/// Spot gold comes from MetalPriceAPI when a key is configured and from the
/// static default otherwise.
pub struct HttpPriceSource {
    coingecko: CoinGeckoClient,
    metalprice: Option<MetalPriceClient>,
}

impl HttpPriceSource {
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let coingecko = CoinGeckoClient::with_config(CoinGeckoConfig {
            base_url: config.coingecko_url.clone(),
            api_key: config.coingecko_api_key.clone(),
            timeout,
        })?;
        let metalprice = match &config.metalprice_api_key {
            Some(key) => Some(MetalPriceClient::new(
                config.metalprice_url.clone(),
                key.clone(),
                timeout,
            )?),
            None => None,
        };
        Ok(Self {
            coingecko,
            metalprice,
        })
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch_prices(&self) -> Result<HashMap<String, PriceQuote>, FeedError> {
        self.coingecko.fetch_markets().await
    }

    async fn fetch_reference_spot(&self) -> Result<ReferenceSpot, FeedError> {
        match &self.metalprice {
            Some(client) => match client.fetch_spot().await {
                Ok(spot) => Ok(spot),
                Err(e) => {
                    tracing::warn!(error = %e, "Spot gold fetch failed, using default");
                    Ok(fallback::default_spot())
                }
            },
            None => Ok(fallback::default_spot()),
        }
    }
}

/// Offline price source serving the static default dataset
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPriceSource;

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_prices(&self) -> Result<HashMap<String, PriceQuote>, FeedError> {
        Ok(fallback::default_quotes())
    }

    async fn fetch_reference_spot(&self) -> Result<ReferenceSpot, FeedError> {
        Ok(fallback::default_spot())
    }
}
