//! Relay submitter
//!
//! Forwards orders to a trade relay service that holds exchange credentials.
//! The relay answers with an [`OrderResult`].

use super::{ExecutionError, OrderRequest, OrderResult, OrderSubmitter};
use crate::settings::Exchange;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Relay body; `dryRun` is camelCase and the relay treats a missing flag as a dry run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayRequest<'a> {
    order: &'a OrderRequest,
    dry_run: bool,
    exchange: Exchange,
}

/// Submits orders over HTTP to a relay endpoint
pub struct RelaySubmitter {
    url: String,
    client: Client,
}

impl RelaySubmitter {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ExecutionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl OrderSubmitter for RelaySubmitter {
    async fn submit(
        &self,
        order: &OrderRequest,
        dry_run: bool,
        exchange: Exchange,
    ) -> Result<OrderResult, ExecutionError> {
        let body = RelayRequest {
            order,
            dry_run,
            exchange,
        };

        tracing::debug!(url = %self.url, product = %order.product_id, dry_run, "Posting order to relay");

        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        Ok(parse_relay_response(status.as_u16(), &text))
    }
}

/// Interpret a relay reply; non-JSON or non-2xx bodies become rejections
fn parse_relay_response(status: u16, body: &str) -> OrderResult {
    match serde_json::from_str::<OrderResult>(body) {
        Ok(result) if (200..300).contains(&status) => result,
        Ok(result) => OrderResult {
            success: false,
            order_id: result.order_id,
            error: Some(result.error.unwrap_or_else(|| format!("relay returned {status}"))),
        },
        Err(_) if (200..300).contains(&status) => {
            OrderResult::rejected(format!("unreadable relay response: {body}"))
        }
        Err(_) => OrderResult::rejected(format!("relay returned {status}: {body}")),
    }
}
