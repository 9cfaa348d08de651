//! Caching layer for latest quotes
//!
//! In-memory only, lives as long as its owner. Entries expire lazily: a
//! stale entry stays in the map until the next successful fetch overwrites
//! it.

mod quote_cache;

pub use quote_cache::{CacheEntry, QuoteCache, QuoteCacheStats};
