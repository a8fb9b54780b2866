//! Price feed types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spot gold (reference benchmark, not tradable)
pub const GOLD_SPOT: &str = "gold";
/// PAX Gold token
pub const PAX_GOLD: &str = "pax-gold";
/// Tether Gold token
pub const TETHER_GOLD: &str = "tether-gold";
/// Bitcoin
pub const BITCOIN: &str = "bitcoin";
/// Ethereum
pub const ETHEREUM: &str = "ethereum";
/// Bitcoin Cash
pub const BITCOIN_CASH: &str = "bitcoin-cash";

/// Asset ids requested from the price provider on every refresh
pub const TRACKED_ASSETS: [&str; 5] = [PAX_GOLD, TETHER_GOLD, BITCOIN, ETHEREUM, BITCOIN_CASH];

/// A single historical sample attached to a quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparklinePoint {
    /// Sample time
    pub time: DateTime<Utc>,
    /// Price in USD
    pub price: Decimal,
}

/// Latest quote for a tradable asset
///
/// Replaced wholesale on every refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Provider identifier (e.g., "pax-gold")
    pub id: String,
    /// Ticker symbol (e.g., "PAXG")
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Current price in USD
    pub price: Decimal,
    /// 24h change in percent
    pub change_24h: Decimal,
    /// 7d change in percent
    pub change_7d: Decimal,
    /// Ordered price history, oldest first
    pub sparkline: Vec<SparklinePoint>,
    pub volume_24h: Option<Decimal>,
    pub market_cap: Option<Decimal>,
}

/// Spot commodity benchmark (gold per troy ounce)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSpot {
    /// Current price in USD
    pub price: Decimal,
    /// 24h change in percent
    pub change_24h: Decimal,
    /// 7d change in percent
    pub change_7d: Decimal,
    /// Price unit, e.g. "USD/oz"
    pub unit: String,
    /// Ordered price history, oldest first
    pub sparkline: Vec<SparklinePoint>,
}

/// Price provider errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure (connect, timeout, decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider answered with a non-success status
    #[error("Provider error: {status} - {body}")]
    Status { status: u16, body: String },
    /// Response could not be mapped onto quotes
    #[error("Malformed response: {0}")]
    Malformed(String),
}
