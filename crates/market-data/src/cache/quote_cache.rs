//! In-memory quote cache with a fixed TTL

use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

use crate::models::QuoteResult;

/// A cached quote and the moment it was fetched.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub value: QuoteResult,
    pub fetched_at: Instant,
}

impl CacheEntry {
    fn new(value: QuoteResult) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    /// An entry is fresh while its age is strictly below the TTL.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}

/// Concurrent symbol -> quote map with a fixed time-to-live.
///
/// Keys are expected to be normalized (uppercased) by the caller. Reads and
/// writes lock only the shard holding the key, so lookups for other symbols
/// never wait on each other. Nothing is evicted automatically.
pub struct QuoteCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl QuoteCache {
    /// Create an empty cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the cached quote if it is still fresh.
    pub fn get_fresh(&self, key: &str) -> Option<QuoteResult> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.value.clone())
    }

    /// Get the entry for a key, fresh or stale.
    pub fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store a quote fetched just now, replacing any previous entry.
    pub fn insert(&self, key: String, value: QuoteResult) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    /// Remove a single entry. Returns true if one was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count fresh and stale entries.
    pub fn stats(&self) -> QuoteCacheStats {
        let mut stats = QuoteCacheStats::default();
        for entry in self.entries.iter() {
            if entry.is_fresh(self.ttl) {
                stats.fresh += 1;
            } else {
                stats.stale += 1;
            }
        }
        stats
    }
}

/// Quote cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteCacheStats {
    pub fresh: usize,
    pub stale: usize,
}

impl QuoteCacheStats {
    pub fn total(&self) -> usize {
        self.fresh + self.stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_quote(symbol: &str) -> QuoteResult {
        QuoteResult::new(symbol, 100.0, 1.0, 1.0)
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = QuoteCache::new(Duration::from_secs(60));

        cache.insert("MSFT".to_string(), create_test_quote("MSFT"));

        let retrieved = cache.get_fresh("MSFT");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().symbol, "MSFT");
    }

    #[tokio::test]
    async fn test_cache_miss() {
        let cache = QuoteCache::new(Duration::from_secs(60));

        assert!(cache.get_fresh("NONEXISTENT").is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_goes_stale_at_ttl() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        cache.insert("MSFT".to_string(), create_test_quote("MSFT"));

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(cache.get_fresh("MSFT").is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get_fresh("MSFT").is_none());

        // Stale entries are kept until overwritten
        assert!(cache.entry("MSFT").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_overwrites_and_refreshes() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        cache.insert("MSFT".to_string(), create_test_quote("MSFT"));

        tokio::time::advance(Duration::from_secs(90)).await;
        assert!(cache.get_fresh("MSFT").is_none());

        cache.insert("MSFT".to_string(), QuoteResult::new("MSFT", 101.0, 2.0, 2.0));

        let refreshed = cache.get_fresh("MSFT").unwrap();
        assert_eq!(refreshed.current, 101.0);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_never_fresh() {
        let cache = QuoteCache::new(Duration::ZERO);
        cache.insert("MSFT".to_string(), create_test_quote("MSFT"));

        assert!(cache.get_fresh("MSFT").is_none());
    }

    #[tokio::test]
    async fn test_cache_invalidate() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        cache.insert("MSFT".to_string(), create_test_quote("MSFT"));

        assert!(cache.invalidate("MSFT"));
        assert!(!cache.invalidate("MSFT"));
        assert!(cache.get_fresh("MSFT").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_counts_fresh_and_stale() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        cache.insert("MSFT".to_string(), create_test_quote("MSFT"));

        tokio::time::advance(Duration::from_secs(120)).await;
        cache.insert("AAPL".to_string(), create_test_quote("AAPL"));

        let stats = cache.stats();
        assert_eq!(stats, QuoteCacheStats { fresh: 1, stale: 1 });
        assert_eq!(stats.total(), 2);

        cache.clear();
        assert_eq!(cache.stats().total(), 0);
    }
}
