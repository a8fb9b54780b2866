//! MetalPriceAPI client for spot gold

use super::fallback::{synthetic_sparkline, FALLBACK_SPARKLINE_POINTS};
use super::types::{FeedError, ReferenceSpot};
use chrono::Utc;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// MetalPriceAPI base URL
pub const METALPRICE_API_URL: &str = "https://api.metalpriceapi.com/v1";

/// Client for the `latest` endpoint, quoting one troy ounce of gold in USD
pub struct MetalPriceClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    rates: HashMap<String, Decimal>,
}

impl MetalPriceClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Fetch the current spot price
    ///
    /// The provider only returns the latest rate, so the change fields are
    /// zero and the sparkline is synthetic.
    pub async fn fetch_spot(&self) -> Result<ReferenceSpot, FeedError> {
        let url = format!("{}/latest", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("base", "XAU"),
                ("currencies", "USD"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status { status, body });
        }

        let latest: LatestResponse = response.json().await?;
        parse_spot(latest)
    }
}

fn parse_spot(latest: LatestResponse) -> Result<ReferenceSpot, FeedError> {
    let price = latest
        .rates
        .get("USD")
        .copied()
        .filter(|p| *p > Decimal::ZERO)
        .ok_or_else(|| FeedError::Malformed("missing USD rate".to_string()))?;

    Ok(ReferenceSpot {
        price,
        change_24h: Decimal::ZERO,
        change_7d: Decimal::ZERO,
        unit: "USD/oz".to_string(),
        sparkline: synthetic_sparkline(price, FALLBACK_SPARKLINE_POINTS, Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_spot() {
        let latest: LatestResponse =
            serde_json::from_str(r#"{"success": true, "base": "XAU", "rates": {"USD": 3291.4}}"#)
                .unwrap();
        let spot = parse_spot(latest).unwrap();
        assert_eq!(spot.price, dec!(3291.4));
        assert_eq!(spot.unit, "USD/oz");
    }

    #[test]
    fn test_parse_spot_missing_rate() {
        let latest: LatestResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(matches!(parse_spot(latest), Err(FeedError::Malformed(_))));
    }
}
