//! Signals command implementation

use super::AppContext;
use crate::execution::TradeExecutor;
use crate::monitor::Monitor;
use crate::news::StaticNewsSource;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct SignalsArgs {
    /// Serve the static price dataset instead of calling APIs
    #[arg(long)]
    pub offline: bool,

    /// Print suggestions as JSON
    #[arg(long)]
    pub json: bool,

    /// Execute the suggestion with this id after printing
    #[arg(long, value_name = "ID")]
    pub execute: Option<String>,
}

impl SignalsArgs {
    pub async fn execute(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let monitor = Monitor::new(
            ctx.dashboard(),
            ctx.price_source(self.offline)?,
            Arc::new(StaticNewsSource),
            ctx.config.polling.clone(),
        );
        let report = monitor.refresh_prices().await;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report.suggestions)?);
        } else {
            let dashboard = monitor.dashboard();
            let dashboard = dashboard.read().await;
            if let Some(spread) = dashboard.spread() {
                println!(
                    "PAXG/XAUT spread: {:.3}% ({} cheaper)",
                    spread.spread_pct, spread.cheaper
                );
            }
            if report.stale {
                println!(
                    "Warning: prices are stale ({})",
                    dashboard.store().last_error().unwrap_or("unknown error")
                );
            }
            if let Some(alert) = &report.alert {
                println!("Alert: {}", alert.message);
            }
            if report.suggestions.is_empty() {
                println!("No trade suggestions");
            }
            for s in &report.suggestions {
                println!("[{}] {} ({}% confidence)", s.id, s.action, s.confidence);
                println!("    size: {}  expected: {}", s.size, s.expected_profit);
                println!("    {}", s.reason);
            }
        }

        let Some(id) = &self.execute else {
            return Ok(());
        };
        let suggestion = report
            .suggestions
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| anyhow::anyhow!("No current suggestion with id {}", id))?;

        let settings = ctx.settings();
        let executor = TradeExecutor::new(ctx.submitter(&settings)?);
        let result = executor.execute(suggestion, &settings).await?;

        if result.success {
            println!(
                "{} order accepted: {}",
                if settings.dry_run { "DRY RUN" } else { "Live" },
                result.order_id.as_deref().unwrap_or("-")
            );
        } else {
            anyhow::bail!(
                "Order rejected: {}",
                result.error.as_deref().unwrap_or("unknown error")
            );
        }

        Ok(())
    }
}
