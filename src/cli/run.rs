//! Run command implementation

use super::AppContext;
use crate::monitor::Monitor;
use crate::news::StaticNewsSource;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Serve the static price dataset instead of calling APIs
    #[arg(long)]
    pub offline: bool,
}

impl RunArgs {
    pub async fn execute(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let prices = ctx.price_source(self.offline)?;
        let monitor = Arc::new(Monitor::new(
            ctx.dashboard(),
            prices,
            Arc::new(StaticNewsSource),
            ctx.config.polling.clone(),
        ));

        let settings = ctx.settings();
        tracing::info!(
            exchange = %settings.exchange,
            dry_run = settings.dry_run,
            auto_trade = settings.auto_trade_enabled,
            "Starting monitor"
        );
        if settings.auto_trade_enabled {
            tracing::warn!("auto_trade is enabled but suggestions are only executed on request");
        }

        let handle = monitor.start();
        tokio::signal::ctrl_c().await?;
        tracing::info!("Shutdown requested");
        handle.shutdown().await;

        Ok(())
    }
}
