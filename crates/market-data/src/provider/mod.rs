//! Quote provider abstraction and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait the fetcher calls on a cache miss
//! - The Alpha Vantage `GLOBAL_QUOTE` implementation
//!
//! Providers do not cache. Caching is the job of
//! [`CachedQuoteFetcher`](crate::CachedQuoteFetcher).

mod traits;

pub mod alpha_vantage;

pub use traits::QuoteProvider;
