//! Portfolio module
//!
//! User-owned holdings and their valuation against the live snapshot

mod book;
mod types;
mod valuation;

pub use book::{Portfolio, PORTFOLIO_KEY};
pub use types::{catalog_by_id, catalog_by_symbol, CatalogAsset, PortfolioEntry, CATALOG};
pub use valuation::{current_price, PortfolioValuation};
