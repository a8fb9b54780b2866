//! Correlation engine
//!
//! Pairwise Pearson correlation of trailing sparkline series for spot gold,
//! the two gold tokens, BTC and ETH.

use crate::feed::{
    PriceSnapshotStore, SparklinePoint, BITCOIN, ETHEREUM, GOLD_SPOT, PAX_GOLD, TETHER_GOLD,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Assets in matrix order, with display labels
pub const CORRELATION_ASSETS: [(&str, &str); 5] = [
    (GOLD_SPOT, "Gold"),
    (PAX_GOLD, "PAXG"),
    (TETHER_GOLD, "XAUT"),
    (BITCOIN, "BTC"),
    (ETHEREUM, "ETH"),
];

/// Lookback window for correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrelationPeriod {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl CorrelationPeriod {
    pub const ALL: [CorrelationPeriod; 4] = [
        Self::OneHour,
        Self::OneDay,
        Self::SevenDays,
        Self::ThirtyDays,
    ];

    /// Target number of trailing samples per series
    ///
    /// 30d reuses the 7d window: the hourly sparkline only covers 7 days.
    pub fn sample_count(self) -> usize {
        match self {
            Self::OneHour => 1,
            Self::OneDay => 24,
            Self::SevenDays => 168,
            Self::ThirtyDays => 168,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }
}

impl std::fmt::Display for CorrelationPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrelationPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1h" => Ok(Self::OneHour),
            "1d" => Ok(Self::OneDay),
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            other => Err(format!("unknown correlation period: {other} (expected 1h, 1d, 7d or 30d)")),
        }
    }
}

/// Square correlation matrix over [`CORRELATION_ASSETS`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub period: CorrelationPeriod,
    /// Row/column labels
    pub assets: Vec<String>,
    /// Row-major coefficients
    pub matrix: Vec<Vec<f64>>,
    pub updated_at: DateTime<Utc>,
}

impl CorrelationMatrix {
    /// Coefficient between two labels
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.assets.iter().position(|x| x == a)?;
        let j = self.assets.iter().position(|x| x == b)?;
        Some(self.matrix[i][j])
    }
}

/// Down-sample a sparkline to at most `count` trailing prices
///
/// Keeps every k-th sample with k = max(1, len / count), then the last
/// `count` of those.
pub fn sparkline_prices(points: &[SparklinePoint], count: usize) -> Vec<f64> {
    let step = (points.len() / count.max(1)).max(1);
    let sampled: Vec<f64> = points
        .iter()
        .step_by(step)
        .map(|p| f64::try_from(p.price).unwrap_or(0.0))
        .collect();
    let skip = sampled.len().saturating_sub(count);
    sampled[skip..].to_vec()
}

/// Pearson correlation coefficient over the common prefix of `x` and `y`
///
/// Returns 0 for fewer than two samples or a flat series; the result is
/// clamped to [-1, 1].
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }
    let xs = &x[..n];
    let ys = &y[..n];

    let mx = xs.iter().sum::<f64>() / n as f64;
    let my = ys.iter().sum::<f64>() / n as f64;

    let (mut num, mut dx2, mut dy2) = (0.0, 0.0, 0.0);
    for (a, b) in xs.iter().zip(ys) {
        let dx = a - mx;
        let dy = b - my;
        num += dx * dy;
        dx2 += dx * dx;
        dy2 += dy * dy;
    }

    let denom = (dx2 * dy2).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    (num / denom).clamp(-1.0, 1.0)
}

/// Computes correlation matrices from the current snapshot
#[derive(Debug, Default, Clone, Copy)]
pub struct CorrelationEngine;

impl CorrelationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Trailing series for each asset in matrix order; empty when no quote
    fn series(&self, store: &PriceSnapshotStore, period: CorrelationPeriod) -> Vec<Vec<f64>> {
        let n = period.sample_count();
        CORRELATION_ASSETS
            .iter()
            .map(|(id, _)| {
                let sparkline = if *id == GOLD_SPOT {
                    store.spot().map(|s| s.sparkline.as_slice())
                } else {
                    store.quote(id).map(|q| q.sparkline.as_slice())
                };
                sparkline.map(|s| sparkline_prices(s, n)).unwrap_or_default()
            })
            .collect()
    }

    pub fn compute(&self, store: &PriceSnapshotStore, period: CorrelationPeriod) -> CorrelationMatrix {
        let series = self.series(store, period);
        let size = series.len();
        let mut matrix = vec![vec![0.0; size]; size];

        for i in 0..size {
            matrix[i][i] = 1.0;
            for j in (i + 1)..size {
                let r = pearson_correlation(&series[i], &series[j]);
                matrix[i][j] = r;
                matrix[j][i] = r;
            }
        }

        tracing::debug!(period = %period, "Correlation matrix computed");

        CorrelationMatrix {
            period,
            assets: CORRELATION_ASSETS
                .iter()
                .map(|(_, label)| label.to_string())
                .collect(),
            matrix,
            updated_at: Utc::now(),
        }
    }
}
