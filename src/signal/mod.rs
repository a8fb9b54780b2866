//! Signal generation module
//!
//! Correlations, spread alerts and trade suggestions derived from the
//! current price snapshot. Nothing here submits orders.

mod correlation;
mod spread;
mod suggestions;
mod types;

pub use correlation::{
    pearson_correlation, sparkline_prices, CorrelationEngine, CorrelationMatrix, CorrelationPeriod,
    CORRELATION_ASSETS,
};
pub use spread::{compute_spread, SpreadConfig, SpreadDetector, SpreadReading};
pub use suggestions::{
    SuggestionConfig, SuggestionEngine, ARB_CONFIDENCE, HEDGE_CONFIDENCE, HEDGE_SIZE_LABEL,
    PREMIUM_CONFIDENCE,
};
pub use types::{ExecutionTarget, Side, SuggestionKind, TradeSuggestion};
