//! Alert types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Alert category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Arbitrage,
    Price,
    Info,
}

/// Content of an alert before the log assigns identity
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub kind: AlertKind,
    pub message: String,
    /// Absolute spread in percent, for arbitrage alerts
    pub spread: Option<Decimal>,
}

/// A raised signal kept in the alert log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertItem {
    pub id: String,
    pub message: String,
    pub kind: AlertKind,
    pub timestamp: DateTime<Utc>,
    pub spread: Option<Decimal>,
    pub dismissed: bool,
}
