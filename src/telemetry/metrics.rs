//! Prometheus metrics

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Completed price refreshes
    PriceRefreshes,
    /// Price refreshes that fell back to cached or default data
    PriceRefreshFailures,
    /// Completed news refreshes
    NewsRefreshes,
    /// Spread alerts raised
    AlertsRaised,
    /// Trade suggestions emitted
    SuggestionsEmitted,
    /// Orders accepted by a submitter
    OrdersAccepted,
    /// Orders rejected or failed in transport
    OrdersRejected,
}

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Full price refresh, both sources
    PriceRefresh,
    /// Order submission round trip
    OrderSubmission,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Current PAXG/XAUT spread percentage
    SpreadPct,
    /// Current portfolio value in USD
    PortfolioValue,
    /// Non-dismissed alerts
    ActiveAlerts,
}

fn counter_name(metric: CounterMetric) -> &'static str {
    match metric {
        CounterMetric::PriceRefreshes => "goldtrackr_price_refreshes_total",
        CounterMetric::PriceRefreshFailures => "goldtrackr_price_refresh_failures_total",
        CounterMetric::NewsRefreshes => "goldtrackr_news_refreshes_total",
        CounterMetric::AlertsRaised => "goldtrackr_alerts_raised_total",
        CounterMetric::SuggestionsEmitted => "goldtrackr_suggestions_emitted_total",
        CounterMetric::OrdersAccepted => "goldtrackr_orders_accepted_total",
        CounterMetric::OrdersRejected => "goldtrackr_orders_rejected_total",
    }
}

/// Increment a counter by `value`
pub fn increment(metric: CounterMetric, value: u64) {
    ::metrics::counter!(counter_name(metric)).increment(value);
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::PriceRefresh => "goldtrackr_price_refresh_latency_ms",
        LatencyMetric::OrderSubmission => "goldtrackr_order_submission_latency_ms",
    };

    ::metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::SpreadPct => "goldtrackr_spread_pct",
        GaugeMetric::PortfolioValue => "goldtrackr_portfolio_value_usd",
        GaugeMetric::ActiveAlerts => "goldtrackr_active_alerts",
    };

    ::metrics::gauge!(metric_name).set(value);
}

/// Install the Prometheus recorder and its scrape endpoint
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus metrics listening");
    Ok(())
}
