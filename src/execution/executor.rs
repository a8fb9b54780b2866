//! Manual execution of trade suggestions

use super::{ExecutionError, OrderRequest, OrderResult, OrderSubmitter};
use crate::settings::TradingSettings;
use crate::signal::TradeSuggestion;
use crate::telemetry::{self, CounterMetric, LatencyMetric};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Executes one suggestion at a time through an [`OrderSubmitter`]
pub struct TradeExecutor {
    submitter: Arc<dyn OrderSubmitter>,
    executing: Mutex<Option<String>>,
}

/// Clears the in-flight slot when dropped
struct InFlight<'a> {
    slot: &'a Mutex<Option<String>>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl TradeExecutor {
    pub fn new(submitter: Arc<dyn OrderSubmitter>) -> Self {
        Self {
            submitter,
            executing: Mutex::new(None),
        }
    }

    /// Id of the suggestion currently being executed
    pub fn executing(&self) -> Option<String> {
        self.executing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Market IOC order for the suggestion's target, sized at `max_trade_size`
    pub fn build_order(suggestion: &TradeSuggestion, max_trade_size: Decimal) -> OrderRequest {
        OrderRequest::market(
            suggestion.target.product_id.clone(),
            suggestion.target.side,
            max_trade_size,
        )
    }

    /// Submit the order for `suggestion`
    ///
    /// Fails with [`ExecutionError::AlreadyExecuting`] while another
    /// submission is in flight. The slot is released on every exit path.
    pub async fn execute(
        &self,
        suggestion: &TradeSuggestion,
        settings: &TradingSettings,
    ) -> Result<OrderResult, ExecutionError> {
        if settings.max_trade_size <= Decimal::ZERO {
            return Err(ExecutionError::InvalidSize(settings.max_trade_size));
        }

        let _in_flight = self.acquire(&suggestion.id)?;
        let order = Self::build_order(suggestion, settings.max_trade_size);

        tracing::info!(
            suggestion = %suggestion.id,
            action = %suggestion.action,
            exchange = %settings.exchange,
            dry_run = settings.dry_run,
            "Executing suggestion"
        );

        let started = Instant::now();
        let result = self
            .submitter
            .submit(&order, settings.dry_run, settings.exchange)
            .await;
        telemetry::record_latency(LatencyMetric::OrderSubmission, started.elapsed());

        match &result {
            Ok(r) if r.success => {
                telemetry::increment(CounterMetric::OrdersAccepted, 1);
                tracing::info!(suggestion = %suggestion.id, order_id = ?r.order_id, "Order accepted");
            }
            Ok(r) => {
                telemetry::increment(CounterMetric::OrdersRejected, 1);
                tracing::warn!(suggestion = %suggestion.id, error = ?r.error, "Order rejected");
            }
            Err(e) => {
                telemetry::increment(CounterMetric::OrdersRejected, 1);
                tracing::error!(suggestion = %suggestion.id, error = %e, "Order submission failed");
            }
        }

        result
    }

    fn acquire(&self, id: &str) -> Result<InFlight<'_>, ExecutionError> {
        let mut slot = self.executing.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(current) = slot.as_ref() {
            return Err(ExecutionError::AlreadyExecuting(current.clone()));
        }
        *slot = Some(id.to_string());
        Ok(InFlight {
            slot: &self.executing,
        })
    }
}
