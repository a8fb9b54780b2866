//! Price snapshot store
//!
//! Holds the latest quote per asset plus the spot gold reference. Every
//! successful refresh replaces the snapshot wholesale; a failed refresh keeps
//! the last-known-good data (or installs the static default set) and raises
//! the stale flag.

use super::fallback;
use super::types::{PriceQuote, ReferenceSpot};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Latest known prices
#[derive(Debug, Clone, Default)]
pub struct PriceSnapshotStore {
    quotes: HashMap<String, PriceQuote>,
    spot: Option<ReferenceSpot>,
    last_updated: Option<DateTime<Utc>>,
    stale: bool,
    last_error: Option<String>,
}

impl PriceSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all quotes with a fresh fetch result
    pub fn replace_quotes(&mut self, quotes: HashMap<String, PriceQuote>) {
        self.quotes = quotes;
        self.last_updated = Some(Utc::now());
        self.stale = false;
        self.last_error = None;
    }

    /// Replace the spot reference
    pub fn set_spot(&mut self, spot: ReferenceSpot) {
        self.spot = Some(spot);
    }

    /// Record a failed refresh
    ///
    /// Keeps existing quotes; if nothing was ever fetched, falls back to the
    /// static default dataset.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        if self.quotes.is_empty() {
            self.quotes = fallback::default_quotes();
        }
        if self.spot.is_none() {
            self.spot = Some(fallback::default_spot());
        }
        self.stale = true;
        self.last_error = Some(error.into());
    }

    pub fn quote(&self, id: &str) -> Option<&PriceQuote> {
        self.quotes.get(id)
    }

    pub fn quotes(&self) -> &HashMap<String, PriceQuote> {
        &self.quotes
    }

    pub fn spot(&self) -> Option<&ReferenceSpot> {
        self.spot.as_ref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// True when the current data did not come from the latest refresh
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
