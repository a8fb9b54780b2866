//! Portfolio valuation against live prices

use super::types::{catalog_by_symbol, PortfolioEntry};
use crate::feed::{PriceSnapshotStore, GOLD_SPOT};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Aggregate P&L, computed on demand and never stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioValuation {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub pnl: Decimal,
    /// P&L relative to cost, in percent
    pub pnl_pct: Decimal,
    /// Share of value held in gold-backed assets, in percent
    pub gold_pct: Decimal,
    pub crypto_pct: Decimal,
}

/// Current USD price for a portfolio symbol; zero when unknown
pub fn current_price(symbol: &str, store: &PriceSnapshotStore) -> Decimal {
    let Some(asset) = catalog_by_symbol(symbol) else {
        return Decimal::ZERO;
    };
    if asset.id == GOLD_SPOT {
        return store.spot().map(|s| s.price).unwrap_or_default();
    }
    store.quote(asset.id).map(|q| q.price).unwrap_or_default()
}

impl PortfolioValuation {
    pub fn compute(entries: &[PortfolioEntry], store: &PriceSnapshotStore) -> Self {
        let mut total_value = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;
        let mut gold_value = Decimal::ZERO;

        for entry in entries {
            let value = entry.amount * current_price(&entry.symbol, store);
            total_value += value;
            total_cost += entry.amount * entry.buy_price;
            if catalog_by_symbol(&entry.symbol).is_some_and(|a| a.gold_backed) {
                gold_value += value;
            }
        }

        let pnl = total_value - total_cost;
        let pnl_pct = if total_cost > Decimal::ZERO {
            pnl / total_cost * dec!(100)
        } else {
            Decimal::ZERO
        };
        let gold_pct = if total_value > Decimal::ZERO {
            gold_value / total_value * dec!(100)
        } else {
            Decimal::ZERO
        };

        Self {
            total_value,
            total_cost,
            pnl,
            pnl_pct,
            gold_pct,
            crypto_pct: dec!(100) - gold_pct,
        }
    }
}
