//! Correlations command implementation

use super::AppContext;
use crate::monitor::Monitor;
use crate::news::StaticNewsSource;
use crate::signal::CorrelationPeriod;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct CorrelationsArgs {
    /// Lookback period: 1h, 1d, 7d or 30d
    #[arg(long, default_value = "7d")]
    pub period: CorrelationPeriod,

    /// Serve the static price dataset instead of calling APIs
    #[arg(long)]
    pub offline: bool,
}

impl CorrelationsArgs {
    pub async fn execute(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let monitor = Monitor::new(
            ctx.dashboard(),
            ctx.price_source(self.offline)?,
            Arc::new(StaticNewsSource),
            ctx.config.polling.clone(),
        );
        monitor.refresh_prices().await;

        let matrix = monitor.dashboard().read().await.correlations(self.period);

        println!("Correlation ({})", matrix.period);
        print!("{:>6}", "");
        for asset in &matrix.assets {
            print!("{:>8}", asset);
        }
        println!();
        for (asset, row) in matrix.assets.iter().zip(&matrix.matrix) {
            print!("{:>6}", asset);
            for value in row {
                print!("{:>8.2}", value);
            }
            println!();
        }

        Ok(())
    }
}
