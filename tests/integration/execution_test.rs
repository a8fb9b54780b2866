//! Executing a live suggestion in dry-run mode

use crate::common::{market, spot};
use goldtrackr::config::Config;
use goldtrackr::execution::{DryRunSubmitter, TradeExecutor};
use goldtrackr::monitor::Dashboard;
use goldtrackr::portfolio::Portfolio;
use goldtrackr::signal::Side;
use rust_decimal_macros::dec;
use std::sync::Arc;

#[tokio::test]
async fn test_execute_arbitrage_suggestion() {
    let config = Config::default();
    let mut dash = Dashboard::new(&config, config.trading.initial_settings(), Portfolio::new());
    dash.apply_prices(
        market(dec!(3266), dec!(3300), dec!(0)),
        Some(spot(dec!(3290), dec!(0))),
    );

    let suggestions = dash.suggestions();
    let arb = suggestions
        .iter()
        .find(|s| s.id == "arb-paxg-xaut")
        .unwrap();
    assert_eq!(arb.action, "BUY PAXG • SELL XAUT");

    let submitter = Arc::new(DryRunSubmitter::new());
    let executor = TradeExecutor::new(submitter.clone());
    let result = executor.execute(arb, dash.settings()).await.unwrap();

    assert!(result.success);
    assert!(result.order_id.unwrap().starts_with("dry-run-"));

    let orders = submitter.orders().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].product_id, "PAXG-USD");
    assert_eq!(orders[0].side, Side::Buy);
    assert_eq!(orders[0].base_size(), dec!(0.5));
}
