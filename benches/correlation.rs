//! Benchmarks for correlation and suggestion evaluation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use goldtrackr::feed::{fallback, PriceSnapshotStore};
use goldtrackr::signal::{pearson_correlation, CorrelationEngine, CorrelationPeriod, SuggestionEngine};
use rust_decimal_macros::dec;

fn snapshot() -> PriceSnapshotStore {
    let mut store = PriceSnapshotStore::new();
    store.replace_quotes(fallback::default_quotes());
    store.set_spot(fallback::default_spot());
    store
}

fn benchmark_pearson(c: &mut Criterion) {
    let x: Vec<f64> = (0..168).map(|i| (i as f64 * 0.3).sin()).collect();
    let y: Vec<f64> = (0..168).map(|i| (i as f64 * 0.3).cos()).collect();

    c.bench_function("pearson_168", |b| {
        b.iter(|| pearson_correlation(black_box(&x), black_box(&y)))
    });
}

fn benchmark_matrix(c: &mut Criterion) {
    let store = snapshot();
    let engine = CorrelationEngine::new();

    c.bench_function("correlation_matrix_7d", |b| {
        b.iter(|| engine.compute(black_box(&store), CorrelationPeriod::SevenDays))
    });
}

fn benchmark_suggestions(c: &mut Criterion) {
    let store = snapshot();
    let engine = SuggestionEngine::new();

    c.bench_function("suggestions_evaluate", |b| {
        b.iter(|| engine.evaluate(black_box(&store), dec!(0.5)))
    });
}

criterion_group!(
    benches,
    benchmark_pearson,
    benchmark_matrix,
    benchmark_suggestions
);
criterion_main!(benches);
