//! Stock symbol search.
//!
//! Static stock records (`symbol`, `name`) are bulk loaded into an
//! Elasticsearch index and queried with a mix of fuzzy name matching,
//! symbol prefix matching and name phrase-prefix matching.
//!
//! - [`StockIndex`] - search/index abstraction used by the services
//! - [`ElasticsearchIndex`] - REST implementation (`_search`, `_bulk`, `_refresh`)
//! - [`load_stock_records`] - reads the static JSON stock list

pub mod elasticsearch;
pub mod errors;
pub mod loader;
pub mod models;
pub mod query;
mod traits;

pub use elasticsearch::ElasticsearchIndex;
pub use errors::SearchError;
pub use loader::{bulk_body, load_stock_records};
pub use models::{StockDocument, StockHit, StockRecord};
pub use query::{build_search_body, MAX_HITS};
pub use traits::StockIndex;

/// Index name used when none is configured.
pub const DEFAULT_INDEX: &str = "stocks";
