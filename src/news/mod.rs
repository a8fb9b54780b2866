//! Gold market headlines

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Source of news headlines
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_news(&self) -> anyhow::Result<Vec<NewsItem>>;
}

const HEADLINES: [(&str, &str); 5] = [
    (
        "Gold rallies as Fed signals rate cut pause amid inflation concerns",
        "Gold prices surged past $3,290/oz as the Federal Reserve signaled a cautious approach to rate cuts...",
    ),
    (
        "PAXG vs XAUT: Arbitrage opportunity widens to 0.8% on Coinbase",
        "Traders have spotted a growing spread between PAXG and XAUT on major exchanges...",
    ),
    (
        "China increases gold reserves for third consecutive month amid tariff uncertainty",
        "China's central bank added to its gold reserves again as trade tensions with the US persist...",
    ),
    (
        "Bitcoin correlation with gold reaches 6-month high during Fed uncertainty",
        "The 30-day rolling correlation between BTC and gold has hit 0.68, the highest since August...",
    ),
    (
        "Dollar weakens on tariff news, gold benefits as safe-haven demand rises",
        "The US dollar index fell 0.4% after new tariff announcements spooked currency markets...",
    ),
];

/// Fixed Kitco headlines, one hour apart, newest first
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticNewsSource;

impl StaticNewsSource {
    pub fn headlines_at(now: DateTime<Utc>) -> Vec<NewsItem> {
        HEADLINES
            .iter()
            .enumerate()
            .map(|(i, (title, snippet))| NewsItem {
                id: format!("n{}", i + 1),
                title: (*title).to_string(),
                url: "https://www.kitco.com".to_string(),
                source: "Kitco".to_string(),
                published_at: now - Duration::hours(i as i64),
                snippet: Some((*snippet).to_string()),
            })
            .collect()
    }
}

#[async_trait]
impl NewsSource for StaticNewsSource {
    async fn fetch_news(&self) -> anyhow::Result<Vec<NewsItem>> {
        Ok(Self::headlines_at(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headlines_are_newest_first() {
        let now = Utc::now();
        let items = StaticNewsSource::headlines_at(now);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].id, "n1");
        assert_eq!(items[0].published_at, now);
        assert_eq!(items[4].published_at, now - Duration::hours(4));
        assert!(items.windows(2).all(|w| w[0].published_at > w[1].published_at));
        assert!(items.iter().all(|n| n.source == "Kitco"));
    }

    #[test]
    fn test_static_source_fetch() {
        let items = tokio_test::block_on(StaticNewsSource.fetch_news());
        let items = tokio_test::assert_ok!(items);
        assert!(items[1].title.contains("PAXG vs XAUT"));
    }
}
