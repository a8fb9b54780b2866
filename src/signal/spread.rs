//! Spread / arbitrage alert detector
//!
//! Tracks the percentage spread between the two gold tokens and raises an
//! arbitrage alert when it leaves the threshold band, at most once per
//! cool-down window per pair.
//!
//! spread = (price_b - price_a) / price_a * 100

use crate::alerts::{AlertItem, AlertKind, AlertLog, NewAlert};
use crate::config::SignalConfig;
use crate::feed::{PriceSnapshotStore, PAX_GOLD, TETHER_GOLD};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::types::{fmt_pct, pct_change};

/// Percentage spread from `price1` to `price2`
///
/// Zero when `price1` is zero or the spread is out of `Decimal` range.
pub fn compute_spread(price1: Decimal, price2: Decimal) -> Decimal {
    pct_change(price1, price2).unwrap_or_default()
}

/// Configuration for the spread detector
#[derive(Debug, Clone)]
pub struct SpreadConfig {
    /// Cool-down key for this pair
    pub pair_key: String,
    /// Asset id of the first token (spread denominator)
    pub token_a: String,
    /// Asset id of the second token
    pub token_b: String,
    /// Absolute spread that raises an alert, in percent
    pub threshold_pct: Decimal,
    /// Minimum time between alerts for the same pair
    pub cooldown: Duration,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self {
            pair_key: "paxg-xaut".to_string(),
            token_a: PAX_GOLD.to_string(),
            token_b: TETHER_GOLD.to_string(),
            threshold_pct: dec!(0.5),
            cooldown: Duration::minutes(5),
        }
    }
}

impl SpreadConfig {
    pub fn from_signal_config(config: &SignalConfig) -> Self {
        Self {
            threshold_pct: config.alert_spread_threshold_pct,
            cooldown: Duration::seconds(config.alert_cooldown_secs as i64),
            ..Default::default()
        }
    }
}

/// Current spread between the two tokens
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadReading {
    /// Signed spread in percent
    pub spread_pct: Decimal,
    /// Symbol of the cheaper token
    pub cheaper: String,
    /// Symbol of the pricier token
    pub pricier: String,
}

impl SpreadReading {
    pub fn abs_spread(&self) -> Decimal {
        self.spread_pct.abs()
    }
}

/// Hysteresis-gated arbitrage alert detector
#[derive(Debug)]
pub struct SpreadDetector {
    config: SpreadConfig,
    /// Last alert time per pair key
    last_alert: HashMap<String, DateTime<Utc>>,
}

impl SpreadDetector {
    /// Create a new spread detector with default config
    pub fn new() -> Self {
        Self::with_config(SpreadConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: SpreadConfig) -> Self {
        Self {
            config,
            last_alert: HashMap::new(),
        }
    }

    /// Read the current spread
    ///
    /// `None` when either quote is missing or the spread is out of range.
    pub fn measure(&self, store: &PriceSnapshotStore) -> Option<SpreadReading> {
        let a = store.quote(&self.config.token_a)?;
        let b = store.quote(&self.config.token_b)?;

        let spread_pct = if a.price.is_zero() {
            Decimal::ZERO
        } else {
            pct_change(a.price, b.price)?
        };
        let (cheaper, pricier) = if spread_pct < Decimal::ZERO {
            (&b.symbol, &a.symbol)
        } else {
            (&a.symbol, &b.symbol)
        };

        Some(SpreadReading {
            spread_pct,
            cheaper: cheaper.clone(),
            pricier: pricier.clone(),
        })
    }

    /// Evaluate the current snapshot and raise an alert if warranted
    pub fn observe(&mut self, store: &PriceSnapshotStore, log: &mut AlertLog) -> Option<AlertItem> {
        self.observe_at(store, log, Utc::now())
    }

    /// Same as [`observe`](Self::observe) with an explicit clock
    pub fn observe_at(
        &mut self,
        store: &PriceSnapshotStore,
        log: &mut AlertLog,
        now: DateTime<Utc>,
    ) -> Option<AlertItem> {
        let reading = self.measure(store)?;
        let abs_spread = reading.abs_spread();

        if abs_spread <= self.config.threshold_pct {
            return None;
        }

        if let Some(last) = self.last_alert.get(&self.config.pair_key) {
            if now - *last <= self.config.cooldown {
                tracing::debug!(
                    pair = %self.config.pair_key,
                    spread = %reading.spread_pct,
                    "Spread still out of band, alert cooling down"
                );
                return None;
            }
        }

        let message = format!(
            "{} is {}% cheaper than {} - potential swap signal!",
            reading.cheaper,
            fmt_pct(abs_spread, 2),
            reading.pricier
        );
        let item = log
            .add(NewAlert {
                kind: AlertKind::Arbitrage,
                message,
                spread: Some(abs_spread),
            })
            .clone();
        self.last_alert.insert(self.config.pair_key.clone(), now);

        tracing::info!(
            pair = %self.config.pair_key,
            spread = %reading.spread_pct,
            cheaper = %reading.cheaper,
            "Arbitrage spread alert"
        );

        Some(item)
    }

    /// Get the config
    pub fn config(&self) -> &SpreadConfig {
        &self.config
    }
}

impl Default for SpreadDetector {
    fn default() -> Self {
        Self::new()
    }
}
