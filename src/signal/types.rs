//! Signal types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trading side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Rule family that produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Cross-token arbitrage between the two gold tokens
    Arb,
    /// Token trading away from spot gold
    Premium,
    /// Crypto/gold rebalance
    Hedge,
}

/// Where a suggestion would be executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTarget {
    /// Exchange product, e.g. "PAXG-USD"
    pub product_id: String,
    /// Primary side of the trade
    pub side: Side,
}

impl ExecutionTarget {
    /// Target quoted against USD
    pub fn usd(symbol: &str, side: Side) -> Self {
        Self {
            product_id: format!("{symbol}-USD"),
            side,
        }
    }
}

/// A ranked, human-readable trade idea
///
/// Recomputed from the current snapshot on every input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSuggestion {
    /// Stable per rule and pair
    pub id: String,
    pub kind: SuggestionKind,
    /// Action label, e.g. "SELL PAXG • BUY XAUT"
    pub action: String,
    /// Sizing label
    pub size: String,
    /// Expected profit label
    pub expected_profit: String,
    /// Numeric expected profit in percent, where one is defined
    pub expected_profit_pct: Option<Decimal>,
    /// Rationale shown to the user
    pub reason: String,
    /// Fixed per rule, 0-100
    pub confidence: u8,
    pub target: ExecutionTarget,
}

/// `(value - base) / base * 100`; `None` for a zero base or when out of range
pub(crate) fn pct_change(base: Decimal, value: Decimal) -> Option<Decimal> {
    if base.is_zero() {
        return None;
    }
    value
        .checked_sub(base)?
        .checked_div(base)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Format a percentage with a fixed number of decimals
pub(crate) fn fmt_pct(value: Decimal, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value.round_dp(decimals))
}
