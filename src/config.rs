//! Configuration types for goldtrackr

use crate::feed::{COINGECKO_API_URL, METALPRICE_API_URL};
use crate::settings::{Exchange, TradingSettings};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub signal: SignalConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub trading: TradingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Price provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_coingecko_url")]
    pub coingecko_url: String,
    pub coingecko_api_key: Option<String>,
    #[serde(default = "default_metalprice_url")]
    pub metalprice_url: String,
    /// Spot gold is served from the static default when unset
    pub metalprice_api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_coingecko_url() -> String {
    COINGECKO_API_URL.to_string()
}
fn default_metalprice_url() -> String {
    METALPRICE_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            coingecko_url: default_coingecko_url(),
            coingecko_api_key: None,
            metalprice_url: default_metalprice_url(),
            metalprice_api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Refresh timers
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_price_interval")]
    pub price_interval_secs: u64,
    #[serde(default = "default_news_interval")]
    pub news_interval_secs: u64,
}

fn default_price_interval() -> u64 {
    60
}
fn default_news_interval() -> u64 {
    300
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            price_interval_secs: default_price_interval(),
            news_interval_secs: default_news_interval(),
        }
    }
}

/// Signal thresholds, all in percent
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Spread that raises an arbitrage alert
    #[serde(default = "default_alert_spread")]
    pub alert_spread_threshold_pct: Decimal,
    /// Minimum time between alerts for the same pair
    #[serde(default = "default_alert_cooldown")]
    pub alert_cooldown_secs: u64,
    /// Spread that triggers the cross-token arbitrage suggestion
    #[serde(default = "default_arb_threshold")]
    pub arb_threshold_pct: Decimal,
    /// Fee and slippage haircut subtracted from the arbitrage spread
    #[serde(default = "default_arb_haircut")]
    pub arb_fee_haircut_pct: Decimal,
    /// Deviation from spot that triggers a premium/discount suggestion
    #[serde(default = "default_premium_threshold")]
    pub premium_threshold_pct: Decimal,
    /// Multiple by which the volatile asset's move must exceed gold's
    #[serde(default = "default_hedge_ratio")]
    pub hedge_ratio: Decimal,
}

fn default_alert_spread() -> Decimal {
    dec!(0.5)
}
fn default_alert_cooldown() -> u64 {
    300
}
fn default_arb_threshold() -> Decimal {
    dec!(0.55)
}
fn default_arb_haircut() -> Decimal {
    dec!(0.45)
}
fn default_premium_threshold() -> Decimal {
    dec!(0.80)
}
fn default_hedge_ratio() -> Decimal {
    dec!(3)
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            alert_spread_threshold_pct: default_alert_spread(),
            alert_cooldown_secs: default_alert_cooldown(),
            arb_threshold_pct: default_arb_threshold(),
            arb_fee_haircut_pct: default_arb_haircut(),
            premium_threshold_pct: default_premium_threshold(),
            hedge_ratio: default_hedge_ratio(),
        }
    }
}

/// Alert log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_alert_capacity")]
    pub capacity: usize,
}

fn default_alert_capacity() -> usize {
    20
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            capacity: default_alert_capacity(),
        }
    }
}

/// Initial trading settings and order relay
#[derive(Debug, Clone, Deserialize)]
pub struct TradingConfig {
    #[serde(default)]
    pub exchange: Exchange,
    #[serde(default = "default_true")]
    pub dry_run: bool,
    #[serde(default)]
    pub auto_trade: bool,
    /// Maximum order size in troy ounces
    #[serde(default = "default_max_trade_size")]
    pub max_trade_size: Decimal,
    #[serde(default = "default_daily_loss_limit")]
    pub daily_loss_limit_pct: Decimal,
    /// Order relay endpoint; orders are only simulated when unset
    pub relay_url: Option<String>,
}

fn default_true() -> bool {
    true
}
fn default_max_trade_size() -> Decimal {
    dec!(0.5)
}
fn default_daily_loss_limit() -> Decimal {
    dec!(2.0)
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            exchange: Exchange::default(),
            dry_run: true,
            auto_trade: false,
            max_trade_size: default_max_trade_size(),
            daily_loss_limit_pct: default_daily_loss_limit(),
            relay_url: None,
        }
    }
}

impl TradingConfig {
    /// Settings used when nothing has been persisted yet
    pub fn initial_settings(&self) -> TradingSettings {
        TradingSettings {
            exchange: self.exchange,
            auto_trade_enabled: self.auto_trade,
            dry_run: self.dry_run,
            max_trade_size: self.max_trade_size,
            daily_loss_limit_pct: self.daily_loss_limit_pct,
        }
    }
}

/// Local persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Prometheus exporter port; disabled when unset
    pub metrics_port: Option<u16>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_port: None,
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The shipped `config.toml.example`
    pub fn example() -> anyhow::Result<Self> {
        Ok(toml::from_str(EXAMPLE_CONFIG)?)
    }
}

const EXAMPLE_CONFIG: &str = include_str!("../config.toml.example");
