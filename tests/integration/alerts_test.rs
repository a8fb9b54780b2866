//! Spread alerts through the cool-down and the bounded log

use crate::common::market;
use chrono::{Duration, Utc};
use goldtrackr::alerts::{AlertKind, AlertLog, NewAlert};
use goldtrackr::feed::PriceSnapshotStore;
use goldtrackr::signal::SpreadDetector;
use rust_decimal_macros::dec;

#[test]
fn test_cooldown_sequence() {
    let mut store = PriceSnapshotStore::new();
    store.replace_quotes(market(dec!(3300), dec!(3266), dec!(0)));

    let mut detector = SpreadDetector::new();
    let mut log = AlertLog::default();
    let t0 = Utc::now();

    let first = detector.observe_at(&store, &mut log, t0).unwrap();
    assert_eq!(first.kind, AlertKind::Arbitrage);
    assert_eq!(
        first.message,
        "XAUT is 1.03% cheaper than PAXG - potential swap signal!"
    );

    assert!(detector
        .observe_at(&store, &mut log, t0 + Duration::minutes(2))
        .is_none());
    assert!(detector
        .observe_at(&store, &mut log, t0 + Duration::minutes(5))
        .is_none());
    assert!(detector
        .observe_at(&store, &mut log, t0 + Duration::minutes(5) + Duration::seconds(1))
        .is_some());

    assert_eq!(log.len(), 2);
}

#[test]
fn test_narrow_spread_does_not_touch_cooldown() {
    let mut store = PriceSnapshotStore::new();
    let mut detector = SpreadDetector::new();
    let mut log = AlertLog::default();
    let t0 = Utc::now();

    store.replace_quotes(market(dec!(3300), dec!(3295), dec!(0)));
    assert!(detector.observe_at(&store, &mut log, t0).is_none());

    // First out-of-band reading alerts immediately
    store.replace_quotes(market(dec!(3300), dec!(3266), dec!(0)));
    assert!(detector
        .observe_at(&store, &mut log, t0 + Duration::seconds(1))
        .is_some());
}

#[test]
fn test_log_capacity_and_dismissal() {
    let mut log = AlertLog::default();
    let mut ids = Vec::new();
    for i in 0..21 {
        ids.push(
            log.add(NewAlert {
                kind: AlertKind::Info,
                message: format!("alert {i}"),
                spread: None,
            })
            .id
            .clone(),
        );
    }

    assert_eq!(log.len(), 20);
    assert!(log.get(&ids[0]).is_none());
    assert_eq!(log.all()[0].message, "alert 20");

    assert!(log.dismiss(&ids[5]));
    assert_eq!(log.active_count(), 19);
    assert!(log.get(&ids[5]).unwrap().dismissed);

    log.clear_all();
    assert!(log.is_empty());
}
