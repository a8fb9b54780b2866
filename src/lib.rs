//! goldtrackr: monitor for gold-backed tokens (PAXG, XAUT) against spot gold
//!
//! This library provides the core components for:
//! - Price snapshots from CoinGecko and MetalPriceAPI with static fallback
//! - PAXG/XAUT spread detection with cool-down gated alerts
//! - Rule-based trade suggestions (arbitrage, premium/discount, hedge)
//! - Pearson correlation matrices over sparkline history
//! - Portfolio valuation and persisted user settings
//! - Dry-run and relay order execution for a chosen suggestion
//! - Periodic polling and a logging/metrics stack

pub mod alerts;
pub mod cli;
pub mod config;
pub mod execution;
pub mod feed;
pub mod monitor;
pub mod news;
pub mod portfolio;
pub mod scheduler;
pub mod settings;
pub mod signal;
pub mod storage;
pub mod telemetry;
