//! Portfolio command implementation

use super::AppContext;
use crate::monitor::Monitor;
use crate::news::StaticNewsSource;
use crate::portfolio::{current_price, CATALOG};
use clap::{Args, Subcommand};
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct PortfolioArgs {
    #[command(subcommand)]
    pub command: PortfolioCommand,
}

#[derive(Subcommand, Debug)]
pub enum PortfolioCommand {
    /// Show holdings valued at current prices
    List {
        /// Serve the static price dataset instead of calling APIs
        #[arg(long)]
        offline: bool,
    },
    /// Add a holding
    Add {
        /// Asset id: gold, pax-gold, tether-gold, bitcoin or ethereum
        asset: String,
        /// Units held
        amount: String,
        /// Buy price per unit in USD
        price: String,
    },
    /// Remove a holding by id
    Remove { id: String },
}

impl PortfolioArgs {
    pub async fn execute(&self, ctx: &AppContext) -> anyhow::Result<()> {
        match &self.command {
            PortfolioCommand::List { offline } => list(ctx, *offline).await,
            PortfolioCommand::Add {
                asset,
                amount,
                price,
            } => {
                let mut portfolio = ctx.portfolio_for_update()?;
                let Some(id) = portfolio.add_from_input(asset, amount, price) else {
                    let assets: Vec<&str> = CATALOG.iter().map(|a| a.id).collect();
                    anyhow::bail!(
                        "Invalid holding: amount and price must be positive numbers, asset one of {}",
                        assets.join(", ")
                    );
                };
                portfolio.save(&ctx.store)?;
                tracing::info!(id = %id, asset = %asset, "Holding added");
                println!("Added {}", id);
                Ok(())
            }
            PortfolioCommand::Remove { id } => {
                let mut portfolio = ctx.portfolio_for_update()?;
                if !portfolio.remove(id) {
                    anyhow::bail!("No holding with id {}", id);
                }
                portfolio.save(&ctx.store)?;
                println!("Removed {}", id);
                Ok(())
            }
        }
    }
}

async fn list(ctx: &AppContext, offline: bool) -> anyhow::Result<()> {
    let monitor = Monitor::new(
        ctx.dashboard(),
        ctx.price_source(offline)?,
        Arc::new(StaticNewsSource),
        ctx.config.polling.clone(),
    );
    monitor.refresh_prices().await;

    let dashboard = monitor.dashboard();
    let dashboard = dashboard.read().await;
    let entries = dashboard.portfolio().entries();
    if entries.is_empty() {
        println!("Portfolio is empty");
        return Ok(());
    }

    for entry in entries {
        let price = current_price(&entry.symbol, dashboard.store());
        println!(
            "{}  {:<5} {:>12} @ {:>10.2}  now {:>10.2}",
            entry.id, entry.symbol, entry.amount, entry.buy_price, price
        );
    }

    let v = dashboard.valuation();
    println!();
    println!("  Value: ${:.2}  Cost: ${:.2}", v.total_value, v.total_cost);
    println!("  P&L:   ${:.2} ({:.2}%)", v.pnl, v.pnl_pct);
    println!("  Gold:  {:.1}%  Crypto: {:.1}%", v.gold_pct, v.crypto_pct);

    Ok(())
}
