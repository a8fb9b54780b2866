//! Snapshot builders shared by the integration tests

use chrono::{Duration, Utc};
use goldtrackr::feed::{
    PriceQuote, ReferenceSpot, SparklinePoint, BITCOIN, ETHEREUM, PAX_GOLD, TETHER_GOLD,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// 168 hourly samples following `f(i)`
pub fn hourly_series(f: impl Fn(usize) -> Decimal) -> Vec<SparklinePoint> {
    let now = Utc::now();
    (0..168)
        .map(|i| SparklinePoint {
            time: now - Duration::hours((168 - i) as i64),
            price: f(i),
        })
        .collect()
}

pub fn quote(id: &str, symbol: &str, price: Decimal, change_24h: Decimal) -> PriceQuote {
    PriceQuote {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        price,
        change_24h,
        change_7d: dec!(0),
        sparkline: hourly_series(|i| price + Decimal::from(i as i64)),
        volume_24h: None,
        market_cap: None,
    }
}

pub fn spot(price: Decimal, change_24h: Decimal) -> ReferenceSpot {
    ReferenceSpot {
        price,
        change_24h,
        change_7d: dec!(0),
        unit: "USD/oz".to_string(),
        sparkline: hourly_series(|i| price + Decimal::from(i as i64)),
    }
}

/// Quotes for the four tracked assets used by the rules
pub fn market(paxg: Decimal, xaut: Decimal, btc_change: Decimal) -> HashMap<String, PriceQuote> {
    [
        quote(PAX_GOLD, "PAXG", paxg, dec!(0.1)),
        quote(TETHER_GOLD, "XAUT", xaut, dec!(0.1)),
        quote(BITCOIN, "BTC", dec!(97000), btc_change),
        quote(ETHEREUM, "ETH", dec!(3800), dec!(-1)),
    ]
    .into_iter()
    .map(|q| (q.id.clone(), q))
    .collect()
}
