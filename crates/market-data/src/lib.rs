//! Stockdesk Market Data Crate
//!
//! Latest-quote lookups against a rate-limited upstream provider, fronted by
//! a fixed-TTL in-memory cache.
//!
//! # Architecture
//!
//! ```text
//! +--------------------+
//! |  Request handler   |  (GET /stocks/{ticker})
//! +--------------------+
//!           |
//!           v
//! +--------------------+     hit     +--------------+
//! | CachedQuoteFetcher | ----------> |  QuoteCache  |  (symbol -> value, fetched_at)
//! +--------------------+             +--------------+
//!           | miss                          ^
//!           v                               | store on success
//! +--------------------+                    |
//! |   QuoteProvider    | -------------------+
//! +--------------------+
//!           |
//!           v
//! +--------------------+
//! |   Alpha Vantage    |  (GLOBAL_QUOTE)
//! +--------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteResult`] - Normalized quote `{symbol, current, change, percent}`
//! - [`CachedQuoteFetcher`] - Cache-first quote lookup
//! - [`QuoteCache`] - Concurrent symbol -> entry map with lazy TTL checks
//! - [`QuoteProvider`] - Upstream abstraction, implemented by [`AlphaVantageProvider`]
//! - [`MarketDataError`] - `UpstreamUnavailable`, `TickerNotFound`, `InvalidTicker`

pub mod cache;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod provider;

pub use cache::{CacheEntry, QuoteCache, QuoteCacheStats};
pub use errors::{MarketDataError, RetryClass};
pub use fetcher::{CachedQuoteFetcher, SharedQuoteFetcher};
pub use models::{normalize_ticker, QuoteResult};
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::QuoteProvider;
