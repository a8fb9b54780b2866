//! Snapshot to suggestions and correlations

use crate::common::{market, spot};
use goldtrackr::config::Config;
use goldtrackr::monitor::Dashboard;
use goldtrackr::portfolio::Portfolio;
use goldtrackr::signal::{CorrelationPeriod, Side, SuggestionKind, HEDGE_SIZE_LABEL};
use rust_decimal_macros::dec;

fn dashboard() -> Dashboard {
    let config = Config::default();
    Dashboard::new(&config, config.trading.initial_settings(), Portfolio::new())
}

#[test]
fn test_all_rules_fire_in_declaration_order() {
    let mut dash = dashboard();
    dash.apply_prices(
        market(dec!(3330), dec!(3250), dec!(-6)),
        Some(spot(dec!(3290), dec!(1))),
    );

    let suggestions = dash.suggestions();
    let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "arb-paxg-xaut",
            "premium-pax-gold",
            "premium-tether-gold",
            "hedge-btc-gold"
        ]
    );

    assert_eq!(suggestions[1].action, "SELL PAXG (Premium)");
    assert_eq!(suggestions[2].action, "BUY XAUT (Discount)");

    let hedge = &suggestions[3];
    assert_eq!(hedge.kind, SuggestionKind::Hedge);
    assert_eq!(hedge.size, HEDGE_SIZE_LABEL);
    assert_eq!(hedge.confidence, 75);
    assert_eq!(hedge.target.product_id, "BTC-USD");
    assert_eq!(hedge.target.side, Side::Sell);
}

#[test]
fn test_quiet_market_emits_nothing() {
    let mut dash = dashboard();
    dash.apply_prices(
        market(dec!(3280), dec!(3282), dec!(-1)),
        Some(spot(dec!(3290), dec!(0.5))),
    );

    assert!(dash.suggestions().is_empty());
    assert!(dash.alerts().is_empty());
}

#[test]
fn test_missing_spot_skips_spot_rules_only() {
    let mut dash = dashboard();
    dash.apply_prices(market(dec!(3330), dec!(3250), dec!(-6)), None);

    let suggestions = dash.suggestions();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, SuggestionKind::Arb);
}

#[test]
fn test_correlation_matrix_invariants() {
    let mut dash = dashboard();
    dash.apply_prices(
        market(dec!(3280), dec!(3282), dec!(-1)),
        Some(spot(dec!(3290), dec!(0.5))),
    );

    for period in CorrelationPeriod::ALL {
        let m = dash.correlations(period);
        assert_eq!(m.assets.len(), 5);
        for i in 0..5 {
            assert_eq!(m.matrix[i][i], 1.0);
            for j in 0..5 {
                assert_eq!(m.matrix[i][j], m.matrix[j][i]);
                assert!((-1.0..=1.0).contains(&m.matrix[i][j]));
            }
        }
    }

    // Every series is a rising line, so all pairs move together
    let weekly = dash.correlations(CorrelationPeriod::SevenDays);
    assert!((weekly.get("Gold", "BTC").unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(
        weekly.matrix,
        dash.correlations(CorrelationPeriod::ThirtyDays).matrix
    );

    // A single sample cannot correlate
    let hourly = dash.correlations(CorrelationPeriod::OneHour);
    assert_eq!(hourly.get("PAXG", "XAUT"), Some(0.0));
}
