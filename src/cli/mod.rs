//! CLI interface for goldtrackr
//!
//! Provides subcommands for:
//! - `run`: Poll prices and news, log alerts and suggestions
//! - `signals`: One-shot refresh, print suggestions, optionally execute one
//! - `correlations`: Print the correlation matrix for a lookback period
//! - `portfolio`: List, add or remove holdings
//! - `status`: Show persisted settings and holdings
//! - `config`: Show configuration

mod context;
mod correlations;
mod portfolio;
mod run;
mod signals;

pub use context::AppContext;
pub use correlations::CorrelationsArgs;
pub use portfolio::{PortfolioArgs, PortfolioCommand};
pub use run::RunArgs;
pub use signals::SignalsArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "goldtrackr")]
#[command(about = "Spread, correlation and trade-suggestion monitor for gold-backed tokens")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll prices and news until interrupted
    Run(RunArgs),
    /// Refresh once and print trade suggestions
    Signals(SignalsArgs),
    /// Print the correlation matrix
    Correlations(CorrelationsArgs),
    /// Manage portfolio holdings
    Portfolio(PortfolioArgs),
    /// Show persisted settings and holdings
    Status,
    /// Show configuration
    Config,
}
