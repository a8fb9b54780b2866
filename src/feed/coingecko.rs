//! CoinGecko client for token quotes
//!
//! Fetches current price, 24h/7d change and the 7-day hourly sparkline for
//! every tracked asset in one `coins/markets` call.

use super::fallback::{synthetic_sparkline, FALLBACK_SPARKLINE_POINTS};
use super::types::{FeedError, PriceQuote, SparklinePoint, TRACKED_ASSETS};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Hourly samples in CoinGecko's 7-day sparkline
const SPARKLINE_HOURS: i64 = 168;

/// Configuration for the CoinGecko client
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Optional demo API key
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: std::time::Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_URL.to_string(),
            api_key: None,
            timeout: std::time::Duration::from_secs(10),
        }
    }
}

/// Client for CoinGecko's public market API
pub struct CoinGeckoClient {
    config: CoinGeckoConfig,
    client: Client,
}

impl CoinGeckoClient {
    /// Create a client with custom configuration
    pub fn with_config(config: CoinGeckoConfig) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Fetch quotes for all tracked assets, keyed by asset id
    pub async fn fetch_markets(&self) -> Result<HashMap<String, PriceQuote>, FeedError> {
        let url = format!("{}/coins/markets", self.config.base_url);
        let ids = TRACKED_ASSETS.join(",");

        tracing::debug!(url = %url, ids = %ids, "Fetching CoinGecko markets");

        let mut request = self.client.get(&url).query(&[
            ("vs_currency", "usd"),
            ("ids", ids.as_str()),
            ("sparkline", "true"),
            ("price_change_percentage", "24h,7d"),
        ]);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-cg-demo-api-key", key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status { status, body });
        }

        let coins: Vec<CoinMarket> = response.json().await?;
        if coins.is_empty() {
            return Err(FeedError::Malformed("empty market list".to_string()));
        }

        let now = Utc::now();
        let quotes: HashMap<String, PriceQuote> = coins
            .into_iter()
            .map(|coin| {
                let quote = coin.into_quote(now);
                (quote.id.clone(), quote)
            })
            .collect();

        tracing::debug!(count = quotes.len(), "Parsed CoinGecko quotes");
        Ok(quotes)
    }
}

/// One entry of the `coins/markets` response
#[derive(Debug, Deserialize)]
struct CoinMarket {
    id: String,
    symbol: String,
    name: String,
    current_price: Decimal,
    #[serde(default)]
    price_change_percentage_24h: Option<Decimal>,
    #[serde(default)]
    price_change_percentage_7d_in_currency: Option<Decimal>,
    #[serde(default)]
    sparkline_in_7d: Option<SparklineData>,
    #[serde(default)]
    total_volume: Option<Decimal>,
    #[serde(default)]
    market_cap: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct SparklineData {
    #[serde(default)]
    price: Vec<Decimal>,
}

impl CoinMarket {
    fn into_quote(self, now: DateTime<Utc>) -> PriceQuote {
        let samples = self.sparkline_in_7d.map(|s| s.price).unwrap_or_default();
        let sparkline = if samples.is_empty() {
            synthetic_sparkline(self.current_price, FALLBACK_SPARKLINE_POINTS, now)
        } else {
            samples
                .into_iter()
                .enumerate()
                .map(|(i, price)| SparklinePoint {
                    time: now - Duration::hours(SPARKLINE_HOURS - i as i64),
                    price,
                })
                .collect()
        };

        PriceQuote {
            id: self.id,
            symbol: self.symbol.to_uppercase(),
            name: self.name,
            price: self.current_price,
            change_24h: self.price_change_percentage_24h.unwrap_or_default(),
            change_7d: self.price_change_percentage_7d_in_currency.unwrap_or_default(),
            sparkline,
            volume_24h: self.total_volume,
            market_cap: self.market_cap,
        }
    }
}
