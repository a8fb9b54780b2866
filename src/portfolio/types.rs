//! Portfolio types

use crate::feed::{BITCOIN, ETHEREUM, GOLD_SPOT, PAX_GOLD, TETHER_GOLD};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user-held position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Units held
    pub amount: Decimal,
    /// Acquisition price per unit in USD
    pub buy_price: Decimal,
}

/// An asset that can be added to the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogAsset {
    /// Price snapshot id
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Backed by physical gold
    pub gold_backed: bool,
}

/// Assets selectable for the portfolio
pub const CATALOG: [CatalogAsset; 5] = [
    CatalogAsset {
        id: GOLD_SPOT,
        symbol: "XAU",
        name: "Spot Gold",
        gold_backed: true,
    },
    CatalogAsset {
        id: PAX_GOLD,
        symbol: "PAXG",
        name: "PAX Gold",
        gold_backed: true,
    },
    CatalogAsset {
        id: TETHER_GOLD,
        symbol: "XAUT",
        name: "Tether Gold",
        gold_backed: true,
    },
    CatalogAsset {
        id: BITCOIN,
        symbol: "BTC",
        name: "Bitcoin",
        gold_backed: false,
    },
    CatalogAsset {
        id: ETHEREUM,
        symbol: "ETH",
        name: "Ethereum",
        gold_backed: false,
    },
];

pub fn catalog_by_id(id: &str) -> Option<&'static CatalogAsset> {
    CATALOG.iter().find(|a| a.id == id)
}

pub fn catalog_by_symbol(symbol: &str) -> Option<&'static CatalogAsset> {
    CATALOG.iter().find(|a| a.symbol.eq_ignore_ascii_case(symbol))
}
