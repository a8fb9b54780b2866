//! Execution types

use crate::signal::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an order should be filled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderConfiguration {
    /// Immediate-or-cancel market order for a base-asset quantity
    MarketMarketIoc { base_size: Decimal },
}

/// An order to be submitted, in the exchange brokerage shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Exchange product, e.g. "PAXG-USD"
    pub product_id: String,
    pub side: Side,
    pub order_configuration: OrderConfiguration,
}

impl OrderRequest {
    pub fn market(product_id: impl Into<String>, side: Side, base_size: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            side,
            order_configuration: OrderConfiguration::MarketMarketIoc { base_size },
        }
    }

    pub fn base_size(&self) -> Decimal {
        match &self.order_configuration {
            OrderConfiguration::MarketMarketIoc { base_size } => *base_size,
        }
    }
}

/// Outcome reported by a submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderResult {
    pub fn accepted(order_id: impl Into<String>) -> Self {
        Self {
            success: true,
            order_id: Some(order_id.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            error: Some(error.into()),
        }
    }
}

/// Execution errors
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("already executing suggestion {0}")]
    AlreadyExecuting(String),

    #[error("invalid trade size {0}")]
    InvalidSize(Decimal),

    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),
}
