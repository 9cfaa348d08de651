//! Search index trait definition.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::models::{StockHit, StockRecord};

/// Trait for the stock search backend.
///
/// The quote service only searches; the indexer binary loads and refreshes.
#[async_trait]
pub trait StockIndex: Send + Sync {
    /// Search stocks by symbol or company name. Returns at most
    /// [`MAX_HITS`](crate::MAX_HITS) hits, best match first.
    async fn search(&self, query: &str) -> Result<Vec<StockHit>, SearchError>;

    /// Index (create or replace) the given records, keyed by symbol.
    ///
    /// Returns the number of documents indexed.
    async fn bulk_index(&self, records: &[StockRecord]) -> Result<usize, SearchError>;

    /// Make recently indexed documents visible to search.
    async fn refresh(&self) -> Result<(), SearchError>;
}
