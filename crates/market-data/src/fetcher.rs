//! Cache-first latest quote lookup.
//!
//! A lookup either returns a fresh cached quote without touching the
//! network, or makes exactly one upstream call and stores the result:
//!
//! ```text
//! Absent --fetch ok--> Fresh --TTL elapsed--> Stale --fetch ok--> Fresh
//! ```
//!
//! Failed fetches leave the cache as it was, so the next request for the
//! same symbol goes upstream again. Concurrent misses for one symbol are
//! not coalesced; each performs its own fetch and the last write wins.

use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::QuoteCache;
use crate::errors::MarketDataError;
use crate::models::{is_blank_ticker, normalize_ticker, QuoteResult};
use crate::provider::QuoteProvider;

/// Latest quote fetcher with a fixed-TTL cache in front of the provider.
pub struct CachedQuoteFetcher {
    provider: Arc<dyn QuoteProvider>,
    cache: QuoteCache,
}

impl CachedQuoteFetcher {
    /// Create a fetcher with an empty cache.
    pub fn new(provider: Arc<dyn QuoteProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            cache: QuoteCache::new(ttl),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.cache.ttl()
    }

    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }

    /// Return the latest quote for `ticker`.
    ///
    /// The ticker is trimmed and uppercased for the cache key and the
    /// returned symbol. The provider gets the trimmed ticker in its
    /// original case.
    ///
    /// # Errors
    ///
    /// - [`MarketDataError::InvalidTicker`] for a blank ticker (no I/O)
    /// - [`MarketDataError::UpstreamUnavailable`] / [`MarketDataError::TickerNotFound`]
    ///   from the provider, unchanged
    pub async fn fetch_quote(&self, ticker: &str) -> Result<QuoteResult, MarketDataError> {
        if is_blank_ticker(ticker) {
            return Err(MarketDataError::InvalidTicker(ticker.to_string()));
        }

        let key = normalize_ticker(ticker);

        if let Some(cached) = self.cache.get_fresh(&key) {
            debug!("Quote cache hit for {}", key);
            return Ok(cached);
        }

        debug!(
            "Quote cache miss for {}, fetching from {}",
            key,
            self.provider.id()
        );

        let quote = match self.provider.get_latest_quote(ticker.trim()).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Quote fetch for {} failed ({:?}): {}", key, e.retry_class(), e);
                return Err(e);
            }
        };

        let quote = QuoteResult {
            symbol: key.clone(),
            ..quote
        };
        self.cache.insert(key, quote.clone());

        Ok(quote)
    }
}

/// Fetcher shared between request handlers.
pub type SharedQuoteFetcher = Arc<CachedQuoteFetcher>;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const TTL: Duration = Duration::from_secs(60);

    /// Provider that replays scripted responses and records every call.
    struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<QuoteResult, MarketDataError>>>,
        calls: AtomicUsize,
        tickers: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<QuoteResult, MarketDataError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
                tickers: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteProvider for ScriptedProvider {
        fn id(&self) -> &'static str {
            "SCRIPTED"
        }

        async fn get_latest_quote(&self, ticker: &str) -> Result<QuoteResult, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.tickers.lock().unwrap().push(ticker.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(QuoteResult::new(ticker.to_uppercase(), 1.0, 0.0, 0.0)))
        }
    }

    fn msft() -> QuoteResult {
        QuoteResult::new("MSFT", 100.0, 1.0, 1.0)
    }

    #[tokio::test(start_paused = true)]
    async fn test_miss_then_hit_within_ttl() {
        let provider = ScriptedProvider::new(vec![Ok(msft())]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        let first = fetcher.fetch_quote("MSFT").await.unwrap();
        assert_eq!(first, QuoteResult::new("MSFT", 100.0, 1.0, 1.0));
        assert_eq!(provider.calls(), 1);

        tokio::time::advance(Duration::from_secs(30)).await;

        let second = fetcher.fetch_quote("MSFT").await.unwrap();
        assert_eq!(second, first);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_is_refetched_once() {
        let provider = ScriptedProvider::new(vec![
            Ok(msft()),
            Ok(QuoteResult::new("MSFT", 102.0, 3.0, 3.0)),
        ]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        fetcher.fetch_quote("MSFT").await.unwrap();
        tokio::time::advance(TTL).await;

        let refreshed = fetcher.fetch_quote("MSFT").await.unwrap();
        assert_eq!(refreshed.current, 102.0);
        assert_eq!(provider.calls(), 2);

        // Fresh again after the refresh
        fetcher.fetch_quote("MSFT").await.unwrap();
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_case_variants_share_one_entry() {
        let provider = ScriptedProvider::new(vec![Ok(QuoteResult::new("aapl", 190.0, -1.0, -0.5))]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        let lower = fetcher.fetch_quote("aapl").await.unwrap();
        let upper = fetcher.fetch_quote("AAPL").await.unwrap();

        assert_eq!(lower.symbol, "AAPL");
        assert_eq!(upper.symbol, "AAPL");
        assert_eq!(provider.calls(), 1);
        assert_eq!(fetcher.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_receives_raw_ticker() {
        let provider = ScriptedProvider::new(vec![]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        fetcher.fetch_quote("msft").await.unwrap();

        assert_eq!(*provider.tickers.lock().unwrap(), vec!["msft".to_string()]);
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_shares_entry() {
        let provider = ScriptedProvider::new(vec![Ok(msft())]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        let padded = fetcher.fetch_quote(" msft").await.unwrap();
        let plain = fetcher.fetch_quote("msft").await.unwrap();

        assert_eq!(padded.symbol, "MSFT");
        assert_eq!(plain.symbol, "MSFT");
        assert_eq!(fetcher.cache().len(), 1);
        assert_eq!(provider.calls(), 1);
        assert_eq!(*provider.tickers.lock().unwrap(), vec!["msft".to_string()]);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_cached() {
        let provider = ScriptedProvider::new(vec![
            Err(MarketDataError::upstream("SCRIPTED", "HTTP 503")),
            Ok(msft()),
        ]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        let err = fetcher.fetch_quote("MSFT").await.unwrap_err();
        assert!(matches!(err, MarketDataError::UpstreamUnavailable { .. }));
        assert!(fetcher.cache().is_empty());

        let quote = fetcher.fetch_quote("MSFT").await.unwrap();
        assert_eq!(quote, msft());
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_not_found_creates_no_entry() {
        let provider = ScriptedProvider::new(vec![Err(MarketDataError::TickerNotFound(
            "ZZZZ".to_string(),
        ))]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        let err = fetcher.fetch_quote("zzzz").await.unwrap_err();
        assert!(matches!(err, MarketDataError::TickerNotFound(_)));
        assert!(fetcher.cache().entry("ZZZZ").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refresh_keeps_stale_entry() {
        let provider = ScriptedProvider::new(vec![
            Ok(msft()),
            Err(MarketDataError::upstream("SCRIPTED", "timed out")),
        ]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        fetcher.fetch_quote("MSFT").await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;

        assert!(fetcher.fetch_quote("MSFT").await.is_err());

        let stale = fetcher.cache().entry("MSFT").unwrap();
        assert_eq!(stale.value, msft());
        assert!(!stale.is_fresh(TTL));
    }

    #[tokio::test]
    async fn test_blank_ticker_rejected_without_io() {
        let provider = ScriptedProvider::new(vec![]);
        let fetcher = CachedQuoteFetcher::new(provider.clone(), TTL);

        let err = fetcher.fetch_quote("  ").await.unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidTicker(_)));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_leave_single_entry() {
        let provider = ScriptedProvider::new(vec![]);
        let fetcher = Arc::new(CachedQuoteFetcher::new(provider.clone(), TTL));

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..16 {
            let fetcher = fetcher.clone();
            let ticker = if i % 2 == 0 { "ibm" } else { "IBM" };
            tasks.spawn(async move { fetcher.fetch_quote(ticker).await });
        }

        while let Some(result) = tasks.join_next().await {
            assert_eq!(result.unwrap().unwrap().symbol, "IBM");
        }

        assert_eq!(fetcher.cache().len(), 1);
        assert!(provider.calls() >= 1 && provider.calls() <= 16);
    }
}
