//! Dashboard state
//!
//! Owns everything derived from the price feed plus user-owned state. All
//! mutation goes through `&mut self`; sharing is the caller's concern.

use crate::alerts::{AlertItem, AlertLog};
use crate::config::Config;
use crate::feed::{PriceQuote, PriceSnapshotStore, ReferenceSpot};
use crate::news::NewsItem;
use crate::portfolio::{Portfolio, PortfolioValuation};
use crate::settings::TradingSettings;
use crate::signal::{
    CorrelationEngine, CorrelationMatrix, CorrelationPeriod, SpreadConfig, SpreadDetector,
    SpreadReading, SuggestionConfig, SuggestionEngine, TradeSuggestion,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub struct Dashboard {
    store: PriceSnapshotStore,
    alerts: AlertLog,
    spread: SpreadDetector,
    suggestions: SuggestionEngine,
    correlations: CorrelationEngine,
    news: Vec<NewsItem>,
    settings: TradingSettings,
    portfolio: Portfolio,
}

impl Dashboard {
    /// Build from configuration with user settings and holdings already loaded
    pub fn new(config: &Config, settings: TradingSettings, portfolio: Portfolio) -> Self {
        Self {
            store: PriceSnapshotStore::new(),
            alerts: AlertLog::new(config.alerts.capacity),
            spread: SpreadDetector::with_config(SpreadConfig::from_signal_config(&config.signal)),
            suggestions: SuggestionEngine::with_config(SuggestionConfig::from_signal_config(
                &config.signal,
            )),
            correlations: CorrelationEngine::new(),
            news: Vec::new(),
            settings,
            portfolio,
        }
    }

    /// Install a successful fetch and re-run the spread detector
    pub fn apply_prices(
        &mut self,
        quotes: HashMap<String, PriceQuote>,
        spot: Option<ReferenceSpot>,
    ) -> Option<AlertItem> {
        self.apply_prices_at(quotes, spot, Utc::now())
    }

    pub fn apply_prices_at(
        &mut self,
        quotes: HashMap<String, PriceQuote>,
        spot: Option<ReferenceSpot>,
        now: DateTime<Utc>,
    ) -> Option<AlertItem> {
        self.store.replace_quotes(quotes);
        if let Some(spot) = spot {
            self.store.set_spot(spot);
        }
        self.spread.observe_at(&self.store, &mut self.alerts, now)
    }

    /// Record a failed fetch; the snapshot degrades to last-known-good data
    pub fn apply_failure(
        &mut self,
        error: impl Into<String>,
        spot: Option<ReferenceSpot>,
    ) -> Option<AlertItem> {
        self.apply_failure_at(error, spot, Utc::now())
    }

    pub fn apply_failure_at(
        &mut self,
        error: impl Into<String>,
        spot: Option<ReferenceSpot>,
        now: DateTime<Utc>,
    ) -> Option<AlertItem> {
        if let Some(spot) = spot {
            self.store.set_spot(spot);
        }
        self.store.mark_failed(error);
        self.spread.observe_at(&self.store, &mut self.alerts, now)
    }

    /// Suggestions for the current snapshot, sized by the user's max trade size
    pub fn suggestions(&self) -> Vec<TradeSuggestion> {
        self.suggestions
            .evaluate(&self.store, self.settings.max_trade_size)
    }

    pub fn correlations(&self, period: CorrelationPeriod) -> CorrelationMatrix {
        self.correlations.compute(&self.store, period)
    }

    pub fn spread(&self) -> Option<SpreadReading> {
        self.spread.measure(&self.store)
    }

    pub fn valuation(&self) -> PortfolioValuation {
        PortfolioValuation::compute(self.portfolio.entries(), &self.store)
    }

    pub fn store(&self) -> &PriceSnapshotStore {
        &self.store
    }

    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut AlertLog {
        &mut self.alerts
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn set_news(&mut self, news: Vec<NewsItem>) {
        self.news = news;
    }

    pub fn settings(&self) -> &TradingSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut TradingSettings {
        &mut self.settings
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn portfolio_mut(&mut self) -> &mut Portfolio {
        &mut self.portfolio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{fallback, PAX_GOLD, TETHER_GOLD};
    use crate::signal::SuggestionKind;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn dashboard() -> Dashboard {
        let config = Config::default();
        Dashboard::new(&config, config.trading.initial_settings(), Portfolio::new())
    }

    fn quotes_with(paxg: Decimal, xaut: Decimal) -> HashMap<String, PriceQuote> {
        let mut quotes = fallback::default_quotes();
        if let Some(q) = quotes.get_mut(PAX_GOLD) {
            q.price = paxg;
        }
        if let Some(q) = quotes.get_mut(TETHER_GOLD) {
            q.price = xaut;
        }
        quotes
    }

    #[test]
    fn test_apply_prices_raises_alert_once_per_cooldown() {
        let mut dash = dashboard();
        let t0 = Utc::now();

        let first = dash.apply_prices_at(quotes_with(dec!(3300), dec!(3266)), None, t0);
        assert!(first.is_some());

        let again = dash.apply_prices_at(
            quotes_with(dec!(3300), dec!(3266)),
            None,
            t0 + Duration::minutes(1),
        );
        assert!(again.is_none());
        assert_eq!(dash.alerts().len(), 1);

        let later = dash.apply_prices_at(
            quotes_with(dec!(3300), dec!(3266)),
            None,
            t0 + Duration::minutes(6),
        );
        assert!(later.is_some());
        assert_eq!(dash.alerts().active_count(), 2);
    }

    #[test]
    fn test_apply_failure_installs_fallback() {
        let mut dash = dashboard();
        let alert = dash.apply_failure("timeout", None);

        assert!(alert.is_none());
        assert!(dash.store().is_stale());
        assert_eq!(dash.store().last_error(), Some("timeout"));
        assert_eq!(dash.store().quote(PAX_GOLD).map(|q| q.price), Some(dec!(3280.5)));
        assert_eq!(dash.store().spot().map(|s| s.price), Some(dec!(3290.0)));
    }

    #[test]
    fn test_failure_path_shares_cooldown() {
        let mut dash = dashboard();
        let t0 = Utc::now();
        assert!(dash
            .apply_prices_at(quotes_with(dec!(3300), dec!(3266)), None, t0)
            .is_some());

        // Last-known-good quotes are still wide, but the pair is cooling down
        let stale = dash.apply_failure_at("timeout", None, t0 + Duration::minutes(2));
        assert!(stale.is_none());
        assert!(dash.store().is_stale());
        assert_eq!(dash.store().quote(PAX_GOLD).map(|q| q.price), Some(dec!(3300)));

        let later = dash.apply_failure_at("timeout", None, t0 + Duration::minutes(6));
        assert!(later.is_some());
        assert_eq!(dash.alerts().len(), 2);
    }

    #[test]
    fn test_suggestions_follow_settings_size() {
        let mut dash = dashboard();
        dash.apply_prices(quotes_with(dec!(3300), dec!(3266)), Some(fallback::default_spot()));
        dash.settings_mut().max_trade_size = dec!(2);

        let suggestions = dash.suggestions();
        let arb = suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Arb)
            .unwrap();
        assert_eq!(arb.size, "2 oz equiv");
    }

    #[test]
    fn test_empty_dashboard_is_quiet() {
        let dash = dashboard();
        assert!(dash.suggestions().is_empty());
        assert!(dash.spread().is_none());

        let matrix = dash.correlations(CorrelationPeriod::SevenDays);
        assert_eq!(matrix.get("Gold", "Gold"), Some(1.0));
        assert_eq!(matrix.get("Gold", "BTC"), Some(0.0));
    }
}
