//! Monitor module
//!
//! Polls the price and news sources on fixed timers and feeds results into a
//! shared [`Dashboard`].

mod dashboard;

pub use dashboard::Dashboard;

use crate::alerts::AlertItem;
use crate::config::PollingConfig;
use crate::feed::PriceSource;
use crate::news::NewsSource;
use crate::scheduler::PeriodicTask;
use crate::signal::TradeSuggestion;
use crate::telemetry::{self, CounterMetric, GaugeMetric, LatencyMetric};
use rust_decimal::prelude::ToPrimitive;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Result of one price refresh
#[derive(Debug, Clone)]
pub struct RefreshReport {
    /// Alert raised by this refresh, if any
    pub alert: Option<AlertItem>,
    pub suggestions: Vec<TradeSuggestion>,
    /// Snapshot is last-known-good or fallback data
    pub stale: bool,
}

/// Drives a [`Dashboard`] from live sources
pub struct Monitor {
    dashboard: Arc<RwLock<Dashboard>>,
    prices: Arc<dyn PriceSource>,
    news: Arc<dyn NewsSource>,
    polling: PollingConfig,
}

/// Running refresh timers
pub struct MonitorHandle {
    prices: PeriodicTask,
    news: PeriodicTask,
}

impl MonitorHandle {
    /// Cancel both timers and wait for in-flight refreshes to finish
    pub async fn shutdown(self) {
        self.prices.shutdown().await;
        self.news.shutdown().await;
        tracing::info!("Monitor stopped");
    }
}

impl Monitor {
    pub fn new(
        dashboard: Dashboard,
        prices: Arc<dyn PriceSource>,
        news: Arc<dyn NewsSource>,
        polling: PollingConfig,
    ) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            prices,
            news,
            polling,
        }
    }

    /// Shared handle to the dashboard state
    pub fn dashboard(&self) -> Arc<RwLock<Dashboard>> {
        Arc::clone(&self.dashboard)
    }

    /// Fetch quotes and spot concurrently and update the dashboard
    ///
    /// Never fails: a fetch error degrades the snapshot and is reported via
    /// the `stale` flag.
    pub async fn refresh_prices(&self) -> RefreshReport {
        let started = Instant::now();
        let (quotes, spot) = tokio::join!(
            self.prices.fetch_prices(),
            self.prices.fetch_reference_spot()
        );

        let spot = match spot {
            Ok(spot) => Some(spot),
            Err(e) => {
                tracing::warn!(error = %e, "Spot gold fetch failed, keeping previous reference");
                None
            }
        };

        let mut dashboard = self.dashboard.write().await;
        let alert = match quotes {
            Ok(quotes) => {
                tracing::debug!(count = quotes.len(), "Price refresh succeeded");
                telemetry::increment(CounterMetric::PriceRefreshes, 1);
                dashboard.apply_prices(quotes, spot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Price refresh failed, using last known prices");
                telemetry::increment(CounterMetric::PriceRefreshFailures, 1);
                dashboard.apply_failure(e.to_string(), spot)
            }
        };

        let suggestions = dashboard.suggestions();
        let report = RefreshReport {
            alert,
            stale: dashboard.store().is_stale(),
            suggestions,
        };

        if let Some(alert) = &report.alert {
            telemetry::increment(CounterMetric::AlertsRaised, 1);
            tracing::debug!(id = %alert.id, "Refresh raised an alert");
        }
        for s in &report.suggestions {
            tracing::info!(
                id = %s.id,
                action = %s.action,
                size = %s.size,
                expected = %s.expected_profit,
                confidence = s.confidence,
                "Trade suggestion"
            );
        }
        telemetry::increment(CounterMetric::SuggestionsEmitted, report.suggestions.len() as u64);

        if let Some(reading) = dashboard.spread() {
            telemetry::set_gauge(GaugeMetric::SpreadPct, reading.spread_pct.to_f64().unwrap_or(0.0));
        }
        let valuation = dashboard.valuation();
        telemetry::set_gauge(
            GaugeMetric::PortfolioValue,
            valuation.total_value.to_f64().unwrap_or(0.0),
        );
        telemetry::set_gauge(GaugeMetric::ActiveAlerts, dashboard.alerts().active_count() as f64);
        telemetry::record_latency(LatencyMetric::PriceRefresh, started.elapsed());

        report
    }

    /// Replace the dashboard headlines; failures keep the previous list
    pub async fn refresh_news(&self) {
        match self.news.fetch_news().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "News refreshed");
                telemetry::increment(CounterMetric::NewsRefreshes, 1);
                self.dashboard.write().await.set_news(items);
            }
            Err(e) => {
                tracing::warn!(error = %e, "News refresh failed");
            }
        }
    }

    /// Launch the price and news timers
    pub fn start(self: &Arc<Self>) -> MonitorHandle {
        let price_period = Duration::from_secs(self.polling.price_interval_secs.max(1));
        let news_period = Duration::from_secs(self.polling.news_interval_secs.max(1));

        tracing::info!(
            price_interval_secs = price_period.as_secs(),
            news_interval_secs = news_period.as_secs(),
            "Monitor started"
        );

        let monitor = Arc::clone(self);
        let prices = PeriodicTask::spawn("price-refresh", price_period, move || {
            let monitor = Arc::clone(&monitor);
            async move {
                monitor.refresh_prices().await;
            }
        });

        let monitor = Arc::clone(self);
        let news = PeriodicTask::spawn("news-refresh", news_period, move || {
            let monitor = Arc::clone(&monitor);
            async move {
                monitor.refresh_news().await;
            }
        });

        MonitorHandle { prices, news }
    }
}
