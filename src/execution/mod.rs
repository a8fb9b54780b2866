//! Execution module
//!
//! Turns a user-selected trade suggestion into an order. Signal generation
//! never calls into this module.

mod dry_run;
mod executor;
mod relay;
mod types;

pub use dry_run::DryRunSubmitter;
pub use executor::TradeExecutor;
pub use relay::RelaySubmitter;
pub use types::{ExecutionError, OrderConfiguration, OrderRequest, OrderResult};

use crate::settings::Exchange;
use async_trait::async_trait;

/// Destination for orders
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Submit an order; `dry_run` asks the destination not to place it
    async fn submit(
        &self,
        order: &OrderRequest,
        dry_run: bool,
        exchange: Exchange,
    ) -> Result<OrderResult, ExecutionError>;
}
