//! Portfolio entry management

use super::types::{catalog_by_id, PortfolioEntry};
use crate::storage::{KeyValueStore, StorageError};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

/// Storage key for persisted entries
pub const PORTFOLIO_KEY: &str = "goldtrackr-portfolio";

/// User-owned list of positions
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    entries: Vec<PortfolioEntry>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load persisted entries; a missing document is an empty portfolio
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self, StorageError> {
        let entries = store.load::<Vec<PortfolioEntry>>(PORTFOLIO_KEY)?;
        Ok(Self {
            entries: entries.unwrap_or_default(),
        })
    }

    /// Read-only view: an unreadable document shows as empty
    ///
    /// The result must not be saved back over the unreadable document.
    pub fn load_or_empty<S: KeyValueStore>(store: &S) -> Self {
        Self::load(store).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not load portfolio, showing it empty");
            Self::default()
        })
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), StorageError> {
        store.save(PORTFOLIO_KEY, &self.entries)
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Add a position for a catalog asset
    ///
    /// Returns the new entry id, or `None` (without mutation) for an unknown
    /// asset or a non-positive amount/price.
    pub fn add(&mut self, asset_id: &str, amount: Decimal, buy_price: Decimal) -> Option<String> {
        let asset = catalog_by_id(asset_id)?;
        if amount <= Decimal::ZERO || buy_price <= Decimal::ZERO {
            tracing::debug!(asset = asset_id, %amount, %buy_price, "Rejected portfolio entry");
            return None;
        }

        let id = Uuid::new_v4().to_string();
        self.entries.push(PortfolioEntry {
            id: id.clone(),
            symbol: asset.symbol.to_string(),
            name: asset.name.to_string(),
            amount,
            buy_price,
        });
        Some(id)
    }

    /// Add a position from raw user input; non-numeric input is rejected
    pub fn add_from_input(&mut self, asset_id: &str, amount: &str, buy_price: &str) -> Option<String> {
        let amount = Decimal::from_str(amount.trim()).ok()?;
        let buy_price = Decimal::from_str(buy_price.trim()).ok()?;
        self.add(asset_id, amount, buy_price)
    }

    /// Change amount and/or buy price of an entry; invalid values are ignored
    pub fn update(&mut self, id: &str, amount: Option<Decimal>, buy_price: Option<Decimal>) -> bool {
        if amount.is_some_and(|a| a <= Decimal::ZERO) || buy_price.is_some_and(|p| p <= Decimal::ZERO) {
            return false;
        }
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if let Some(amount) = amount {
            entry.amount = amount;
        }
        if let Some(buy_price) = buy_price {
            entry.buy_price = buy_price;
        }
        true
    }

    /// Remove an entry; returns false when the id is unknown
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{BITCOIN, PAX_GOLD};
    use crate::storage::MemoryStore;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_entry() {
        let mut portfolio = Portfolio::new();
        let id = portfolio.add(PAX_GOLD, dec!(2), dec!(3200)).unwrap();
        let entry = &portfolio.entries()[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.symbol, "PAXG");
        assert_eq!(entry.name, "PAX Gold");
        assert_eq!(entry.amount, dec!(2));
    }

    #[test]
    fn test_add_rejects_invalid_values() {
        let mut portfolio = Portfolio::new();
        assert!(portfolio.add(PAX_GOLD, dec!(0), dec!(3200)).is_none());
        assert!(portfolio.add(PAX_GOLD, dec!(1), dec!(-1)).is_none());
        assert!(portfolio.add("dogecoin", dec!(1), dec!(1)).is_none());
        assert!(portfolio.entries().is_empty());
    }

    #[test]
    fn test_add_from_input() {
        let mut portfolio = Portfolio::new();
        assert!(portfolio.add_from_input(BITCOIN, " 0.25 ", "95000").is_some());
        assert!(portfolio.add_from_input(BITCOIN, "abc", "95000").is_none());
        assert!(portfolio.add_from_input(BITCOIN, "1", "").is_none());
        assert_eq!(portfolio.entries().len(), 1);
        assert_eq!(portfolio.entries()[0].amount, dec!(0.25));
    }

    #[test]
    fn test_update_and_remove() {
        let mut portfolio = Portfolio::new();
        let id = portfolio.add(PAX_GOLD, dec!(1), dec!(3200)).unwrap();

        assert!(portfolio.update(&id, Some(dec!(3)), None));
        assert_eq!(portfolio.entries()[0].amount, dec!(3));
        assert!(!portfolio.update(&id, Some(dec!(-3)), None));
        assert!(!portfolio.update("missing", Some(dec!(1)), None));

        assert!(portfolio.remove(&id));
        assert!(!portfolio.remove(&id));
        assert!(portfolio.entries().is_empty());
    }

    #[test]
    fn test_persistence_roundtrip() {
        let store = MemoryStore::new();
        let mut portfolio = Portfolio::new();
        portfolio.add(PAX_GOLD, dec!(1.5), dec!(3250)).unwrap();
        portfolio.save(&store).unwrap();

        let loaded = Portfolio::load(&store).unwrap();
        assert_eq!(loaded.entries(), portfolio.entries());
        assert!(Portfolio::load(&MemoryStore::new()).unwrap().entries().is_empty());
    }

    #[test]
    fn test_unreadable_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{PORTFOLIO_KEY}.json"));
        let original = r#"[
            {"id": "1", "symbol": "PAXG", "name": "PAX Gold", "amount": "2", "buy_price": "3100"},
            {"id": "2", "symbol": "BTC", "name": "Bitcoin", "amount": "0.1"}
        ]"#;
        std::fs::write(&path, original).unwrap();
        let store = crate::storage::JsonFileStore::new(dir.path());

        assert!(matches!(Portfolio::load(&store), Err(StorageError::Json(_))));
        assert!(Portfolio::load_or_empty(&store).entries().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
