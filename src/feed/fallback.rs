//! Static default dataset
//!
//! Used when a provider is unreachable and no last-known-good snapshot exists,
//! and when no spot gold API key is configured.

use super::types::{
    PriceQuote, ReferenceSpot, SparklinePoint, BITCOIN, BITCOIN_CASH, ETHEREUM, PAX_GOLD,
    TETHER_GOLD,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Number of hourly samples in a synthetic sparkline
pub const FALLBACK_SPARKLINE_POINTS: usize = 24;

/// Default spot gold price (USD/oz)
const DEFAULT_SPOT_PRICE: Decimal = dec!(3290.0);

/// (id, symbol, name, price, change_24h, change_7d)
const DEFAULT_QUOTES: [(&str, &str, &str, Decimal, Decimal, Decimal); 5] = [
    (PAX_GOLD, "PAXG", "PAX Gold", dec!(3280.5), dec!(-0.12), dec!(2.4)),
    (TETHER_GOLD, "XAUT", "Tether Gold", dec!(3284.2), dec!(0.08), dec!(2.1)),
    (BITCOIN, "BTC", "Bitcoin", dec!(97450.0), dec!(-1.8), dec!(5.6)),
    (ETHEREUM, "ETH", "Ethereum", dec!(3850.0), dec!(-2.1), dec!(3.2)),
    (BITCOIN_CASH, "BCH", "Bitcoin Cash", dec!(504.0), dec!(0.5), dec!(1.2)),
];

/// Build an hourly sparkline ending at `now` that oscillates within ±1% of `base`
pub fn synthetic_sparkline(base: Decimal, points: usize, now: DateTime<Utc>) -> Vec<SparklinePoint> {
    (0..points)
        .map(|i| {
            let wave = ((i as f64) * 0.7).sin() * 0.01;
            let factor = Decimal::try_from(1.0 + wave).unwrap_or(Decimal::ONE);
            SparklinePoint {
                time: now - Duration::hours((points - i) as i64),
                price: (base * factor).round_dp(4),
            }
        })
        .collect()
}

/// Default quotes for all tracked assets, keyed by asset id
pub fn default_quotes() -> HashMap<String, PriceQuote> {
    let now = Utc::now();
    DEFAULT_QUOTES
        .iter()
        .map(|&(id, symbol, name, price, change_24h, change_7d)| {
            let quote = PriceQuote {
                id: id.to_string(),
                symbol: symbol.to_string(),
                name: name.to_string(),
                price,
                change_24h,
                change_7d,
                sparkline: synthetic_sparkline(price, FALLBACK_SPARKLINE_POINTS, now),
                volume_24h: Some(price * dec!(10000)),
                market_cap: Some(price * dec!(1000000)),
            };
            (id.to_string(), quote)
        })
        .collect()
}

/// Default spot gold reference
pub fn default_spot() -> ReferenceSpot {
    ReferenceSpot {
        price: DEFAULT_SPOT_PRICE,
        change_24h: dec!(0.35),
        change_7d: dec!(1.8),
        unit: "USD/oz".to_string(),
        sparkline: synthetic_sparkline(DEFAULT_SPOT_PRICE, FALLBACK_SPARKLINE_POINTS, Utc::now()),
    }
}
