//! Trade suggestion engine
//!
//! Pure evaluation of a fixed rule set against the current snapshot:
//!
//! 1. Cross-token arbitrage between PAXG and XAUT
//! 2. Premium/discount of each token against spot gold
//! 3. BTC/gold hedge when BTC moves hard against gold
//!
//! Every applicable rule fires; a rule whose inputs are missing is skipped.
//! Output follows rule order.

use super::types::{fmt_pct, pct_change, ExecutionTarget, Side, SuggestionKind, TradeSuggestion};
use crate::config::SignalConfig;
use crate::feed::{PriceQuote, PriceSnapshotStore, ReferenceSpot, BITCOIN, PAX_GOLD, TETHER_GOLD};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const ARB_CONFIDENCE: u8 = 92;
pub const PREMIUM_CONFIDENCE: u8 = 85;
pub const HEDGE_CONFIDENCE: u8 = 75;

/// Sizing label for hedge suggestions; not derived from holdings
pub const HEDGE_SIZE_LABEL: &str = "20% of holdings";

/// Rule thresholds, all in percent
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub arb_threshold_pct: Decimal,
    pub arb_fee_haircut_pct: Decimal,
    pub premium_threshold_pct: Decimal,
    pub hedge_ratio: Decimal,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            arb_threshold_pct: dec!(0.55),
            arb_fee_haircut_pct: dec!(0.45),
            premium_threshold_pct: dec!(0.80),
            hedge_ratio: dec!(3),
        }
    }
}

impl SuggestionConfig {
    pub fn from_signal_config(config: &SignalConfig) -> Self {
        Self {
            arb_threshold_pct: config.arb_threshold_pct,
            arb_fee_haircut_pct: config.arb_fee_haircut_pct,
            premium_threshold_pct: config.premium_threshold_pct,
            hedge_ratio: config.hedge_ratio,
        }
    }
}

/// Generates trade suggestions from price snapshots
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// Evaluate all rules against the snapshot
    pub fn evaluate(&self, store: &PriceSnapshotStore, max_trade_size: Decimal) -> Vec<TradeSuggestion> {
        let paxg = store.quote(PAX_GOLD);
        let xaut = store.quote(TETHER_GOLD);
        let btc = store.quote(BITCOIN);
        let spot = store.spot();

        let mut suggestions = Vec::new();

        if let (Some(a), Some(b)) = (paxg, xaut) {
            suggestions.extend(self.arbitrage(a, b, max_trade_size));
        }

        if let Some(spot) = spot {
            for token in [paxg, xaut].into_iter().flatten() {
                suggestions.extend(self.premium(token, spot, max_trade_size));
            }
        }

        if let (Some(btc), Some(spot), Some(haven)) = (btc, spot, paxg) {
            suggestions.extend(self.hedge(btc, spot, haven));
        }

        tracing::debug!(count = suggestions.len(), "Trade suggestions evaluated");
        suggestions
    }

    /// Rule 1: spread = (A - B) / B * 100
    fn arbitrage(&self, a: &PriceQuote, b: &PriceQuote, max_trade_size: Decimal) -> Option<TradeSuggestion> {
        let spread = pct_change(b.price, a.price)?;
        let abs_spread = spread.abs();
        if abs_spread <= self.config.arb_threshold_pct {
            return None;
        }

        let a_expensive = spread > Decimal::ZERO;
        // Not clamped: a thin spread can net out negative
        let profit = abs_spread - self.config.arb_fee_haircut_pct;

        let (action, reason, side) = if a_expensive {
            (
                format!("SELL {} • BUY {}", a.symbol, b.symbol),
                format!(
                    "{} is {}% more expensive than {}.",
                    a.symbol,
                    fmt_pct(spread, 2),
                    b.symbol
                ),
                Side::Sell,
            )
        } else {
            (
                format!("BUY {} • SELL {}", a.symbol, b.symbol),
                format!(
                    "{} is {}% cheaper than {}.",
                    a.symbol,
                    fmt_pct(abs_spread, 2),
                    b.symbol
                ),
                Side::Buy,
            )
        };

        Some(TradeSuggestion {
            id: format!("arb-{}-{}", a.symbol.to_lowercase(), b.symbol.to_lowercase()),
            kind: SuggestionKind::Arb,
            action,
            size: format!("{} oz equiv", max_trade_size.normalize()),
            expected_profit: format!(
                "{}% (est. spread {}%)",
                fmt_pct(profit, 2),
                fmt_pct(abs_spread, 2)
            ),
            expected_profit_pct: Some(profit),
            reason,
            confidence: ARB_CONFIDENCE,
            target: ExecutionTarget::usd(&a.symbol, side),
        })
    }

    /// Rule 2: premium = (token - spot) / spot * 100
    fn premium(&self, token: &PriceQuote, spot: &ReferenceSpot, max_trade_size: Decimal) -> Option<TradeSuggestion> {
        let premium = pct_change(spot.price, token.price)?;
        let abs_premium = premium.abs();
        if abs_premium <= self.config.premium_threshold_pct {
            return None;
        }

        let is_premium = premium > Decimal::ZERO;
        let (action, label, side) = if is_premium {
            (format!("SELL {} (Premium)", token.symbol), "premium", Side::Sell)
        } else {
            (format!("BUY {} (Discount)", token.symbol), "discount", Side::Buy)
        };

        Some(TradeSuggestion {
            id: format!("premium-{}", token.id),
            kind: SuggestionKind::Premium,
            action,
            size: format!("{} oz", max_trade_size.normalize()),
            expected_profit: format!("{}% deviation", fmt_pct(abs_premium, 2)),
            expected_profit_pct: Some(abs_premium),
            reason: format!(
                "{} is trading at a {}% {} to spot gold.",
                token.symbol,
                fmt_pct(premium, 2),
                label
            ),
            confidence: PREMIUM_CONFIDENCE,
            target: ExecutionTarget::usd(&token.symbol, side),
        })
    }

    /// Rule 3: opposite 24h moves with the volatile leg moving `hedge_ratio` times harder
    fn hedge(&self, volatile: &PriceQuote, spot: &ReferenceSpot, haven: &PriceQuote) -> Option<TradeSuggestion> {
        let v = volatile.change_24h;
        let g = spot.change_24h;

        let opposite = (v > Decimal::ZERO && g < Decimal::ZERO) || (v < Decimal::ZERO && g > Decimal::ZERO);
        if !opposite {
            return None;
        }
        // An out-of-range bound cannot be exceeded
        let bound = self.config.hedge_ratio.checked_mul(g.abs())?;
        if v.abs() <= bound {
            return None;
        }

        let volatile_down = v < Decimal::ZERO;
        let (action, reason, side) = if volatile_down {
            (
                format!("Rotate {} → {} (Safety)", volatile.symbol, haven.symbol),
                format!(
                    "{} dropped {}% while Gold held up. Good time to hedge.",
                    volatile.symbol,
                    fmt_pct(v, 1)
                ),
                Side::Sell,
            )
        } else {
            (
                format!("Rotate {} → {} (Growth)", haven.symbol, volatile.symbol),
                format!(
                    "{} rallying {}% vs Gold. Consider taking profits into crypto.",
                    volatile.symbol,
                    fmt_pct(v, 1)
                ),
                Side::Buy,
            )
        };

        Some(TradeSuggestion {
            id: format!("hedge-{}-gold", volatile.symbol.to_lowercase()),
            kind: SuggestionKind::Hedge,
            action,
            size: HEDGE_SIZE_LABEL.to_string(),
            expected_profit: "Risk Management".to_string(),
            expected_profit_pct: None,
            reason,
            confidence: HEDGE_CONFIDENCE,
            target: ExecutionTarget::usd(&volatile.symbol, side),
        })
    }
}
