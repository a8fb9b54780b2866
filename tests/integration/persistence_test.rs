//! Settings and holdings survive a restart

use goldtrackr::cli::AppContext;
use goldtrackr::config::Config;
use goldtrackr::feed::{BITCOIN, PAX_GOLD};
use goldtrackr::portfolio::{Portfolio, PORTFOLIO_KEY};
use goldtrackr::settings::{Exchange, TradingSettings, SETTINGS_KEY};
use goldtrackr::storage::JsonFileStore;
use rust_decimal_macros::dec;

#[test]
fn test_settings_and_portfolio_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("state"));
    let initial = Config::default().trading.initial_settings();

    let mut settings = TradingSettings::load_or(&store, initial.clone());
    assert_eq!(settings, initial);
    settings.exchange = Exchange::Kraken;
    assert!(settings.set_max_trade_size(dec!(1.25)));
    settings.save(&store).unwrap();

    let mut portfolio = Portfolio::load(&store).unwrap();
    portfolio.add(PAX_GOLD, dec!(2), dec!(3100)).unwrap();
    portfolio.add_from_input(BITCOIN, "0.05", "90000").unwrap();
    portfolio.save(&store).unwrap();

    assert!(dir.path().join("state").join(format!("{SETTINGS_KEY}.json")).exists());
    assert!(dir.path().join("state").join(format!("{PORTFOLIO_KEY}.json")).exists());

    // Fresh handles, as after a restart
    let store = JsonFileStore::new(dir.path().join("state"));
    let settings = TradingSettings::load_or(&store, initial);
    assert_eq!(settings.exchange, Exchange::Kraken);
    assert_eq!(settings.max_trade_size, dec!(1.25));

    let portfolio = Portfolio::load(&store).unwrap();
    assert_eq!(portfolio.entries().len(), 2);
    assert_eq!(portfolio.entries()[1].symbol, "BTC");
}

#[test]
fn test_corrupt_portfolio_shows_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{PORTFOLIO_KEY}.json")), "{not json").unwrap();

    let store = JsonFileStore::new(dir.path());
    assert!(Portfolio::load(&store).is_err());
    assert!(Portfolio::load_or_empty(&store).entries().is_empty());
}

#[test]
fn test_unreadable_portfolio_is_not_overwritten_on_update() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{PORTFOLIO_KEY}.json"));
    // Second entry lacks buy_price
    let original = r#"[
        {"id": "1", "symbol": "PAXG", "name": "PAX Gold", "amount": "2", "buy_price": "3100"},
        {"id": "2", "symbol": "BTC", "name": "Bitcoin", "amount": "0.1"}
    ]"#;
    std::fs::write(&path, original).unwrap();

    let mut config = Config::default();
    config.storage.data_dir = dir.path().to_path_buf();
    let ctx = AppContext::new(config);

    assert!(ctx.portfolio().entries().is_empty());
    assert!(ctx.portfolio_for_update().is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);

    // Once the file is readable again, edits go through
    std::fs::write(
        &path,
        r#"[{"id": "1", "symbol": "PAXG", "name": "PAX Gold", "amount": "2", "buy_price": "3100"}]"#,
    )
    .unwrap();
    let mut portfolio = ctx.portfolio_for_update().unwrap();
    portfolio.add(PAX_GOLD, dec!(1), dec!(3300)).unwrap();
    portfolio.save(&ctx.store).unwrap();

    let saved = Portfolio::load(&ctx.store).unwrap();
    assert_eq!(saved.entries().len(), 2);
    assert_eq!(saved.entries()[0].id, "1");
}
