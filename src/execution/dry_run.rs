//! Dry-run submitter that never leaves the process

use super::{ExecutionError, OrderRequest, OrderResult, OrderSubmitter};
use crate::settings::Exchange;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Records orders and reports them accepted
#[derive(Debug, Clone, Default)]
pub struct DryRunSubmitter {
    orders: Arc<RwLock<Vec<OrderRequest>>>,
}

impl DryRunSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders seen so far, oldest first
    pub async fn orders(&self) -> Vec<OrderRequest> {
        self.orders.read().await.clone()
    }
}

#[async_trait]
impl OrderSubmitter for DryRunSubmitter {
    async fn submit(
        &self,
        order: &OrderRequest,
        _dry_run: bool,
        exchange: Exchange,
    ) -> Result<OrderResult, ExecutionError> {
        let order_id = format!("dry-run-{}", Uuid::new_v4());

        self.orders.write().await.push(order.clone());

        tracing::info!(
            order_id = %order_id,
            product = %order.product_id,
            side = %order.side,
            size = %order.base_size(),
            exchange = %exchange,
            "Dry run: order not sent"
        );
        Ok(OrderResult::accepted(order_id))
    }
}
