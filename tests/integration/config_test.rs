//! Shipped configuration

use goldtrackr::config::{Config, LogFormat};
use goldtrackr::monitor::Dashboard;
use goldtrackr::portfolio::Portfolio;
use goldtrackr::settings::Exchange;
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn test_config_example_loads() {
    let config = Config::example().unwrap();

    assert_eq!(config.polling.price_interval_secs, 60);
    assert_eq!(config.polling.news_interval_secs, 300);
    assert_eq!(config.signal.alert_spread_threshold_pct, dec!(0.5));
    assert_eq!(config.signal.arb_threshold_pct, dec!(0.55));
    assert_eq!(config.trading.exchange, Exchange::Coinbase);
    assert!(config.trading.dry_run);
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);

    let dash = Dashboard::new(&config, config.trading.initial_settings(), Portfolio::new());
    assert_eq!(dash.alerts().capacity(), 20);
    assert_eq!(dash.settings().max_trade_size, dec!(0.5));
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [signal]
        premium_threshold_pct = 1.5

        [alerts]
        capacity = 5
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.signal.premium_threshold_pct, dec!(1.5));
    assert_eq!(config.alerts.capacity, 5);
    assert_eq!(config.signal.hedge_ratio, dec!(3));
}
