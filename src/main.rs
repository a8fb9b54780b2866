use clap::Parser;
use goldtrackr::cli::{AppContext, Cli, Commands};
use goldtrackr::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::example()?
        }
    };

    // Initialize telemetry
    goldtrackr::telemetry::init_telemetry(&config.telemetry)?;

    let ctx = AppContext::new(config);

    match cli.command {
        Commands::Run(args) => args.execute(&ctx).await?,
        Commands::Signals(args) => args.execute(&ctx).await?,
        Commands::Correlations(args) => args.execute(&ctx).await?,
        Commands::Portfolio(args) => args.execute(&ctx).await?,
        Commands::Status => {
            let settings = ctx.settings();
            let portfolio = ctx.portfolio();
            println!("goldtrackr status");
            println!("  Data dir: {}", ctx.store.dir().display());
            println!("  Exchange: {}", settings.exchange);
            println!(
                "  Mode: {}",
                if settings.dry_run { "Dry run" } else { "Live" }
            );
            println!(
                "  Auto-trade: {}",
                if settings.auto_trade_enabled { "on" } else { "off" }
            );
            println!("  Max trade size: {} oz", settings.max_trade_size);
            println!("  Daily loss limit: {}%", settings.daily_loss_limit_pct);
            println!("  Holdings: {}", portfolio.entries().len());
        }
        Commands::Config => {
            let config = &ctx.config;
            println!("Current configuration:");
            println!("  Feed: {}", config.feed.coingecko_url);
            println!(
                "  Spot gold: {}",
                if config.feed.metalprice_api_key.is_some() {
                    config.feed.metalprice_url.as_str()
                } else {
                    "static reference (no metalprice_api_key)"
                }
            );
            println!(
                "  Polling: prices {}s, news {}s",
                config.polling.price_interval_secs, config.polling.news_interval_secs
            );
            println!(
                "  Alerts: spread > {}%, cool-down {}s, capacity {}",
                config.signal.alert_spread_threshold_pct,
                config.signal.alert_cooldown_secs,
                config.alerts.capacity
            );
            println!(
                "  Suggestions: arb > {}% (haircut {}%), premium > {}%, hedge ratio {}",
                config.signal.arb_threshold_pct,
                config.signal.arb_fee_haircut_pct,
                config.signal.premium_threshold_pct,
                config.signal.hedge_ratio
            );
            println!(
                "  Trading: {} dry_run={} relay={}",
                config.trading.exchange,
                config.trading.dry_run,
                config.trading.relay_url.as_deref().unwrap_or("none")
            );
        }
    }

    Ok(())
}
