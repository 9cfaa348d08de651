use serde::{Deserialize, Serialize};

/// Normalized latest quote for a ticker.
///
/// Serialized as the public `/stocks/{ticker}` response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Uppercased ticker symbol
    pub symbol: String,

    /// Latest traded price
    pub current: f64,

    /// Absolute change since previous close
    pub change: f64,

    /// Percent change since previous close (`1.23` means 1.23%)
    pub percent: f64,
}

impl QuoteResult {
    /// Create a new quote.
    pub fn new(symbol: impl Into<String>, current: f64, change: f64, percent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            current,
            change,
            percent,
        }
    }
}
