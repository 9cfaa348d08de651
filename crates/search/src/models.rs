//! Stock record and search result models.

use serde::{Deserialize, Serialize};

/// One entry of the static stock list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Ticker symbol (e.g., "AAPL")
    pub symbol: String,

    /// Company name (e.g., "Apple Inc.")
    pub name: String,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Completion suggester input stored alongside each document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggest {
    pub input: Vec<String>,
}

/// Document stored in the index, keyed by symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDocument {
    pub symbol: String,
    pub name: String,
    pub suggest: Suggest,
}

impl From<&StockRecord> for StockDocument {
    fn from(record: &StockRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            suggest: Suggest {
                input: vec![record.symbol.clone(), record.name.clone()],
            },
        }
    }
}

/// A single search result returned by `/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockHit {
    pub symbol: String,
    pub name: String,
}

impl StockHit {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}
