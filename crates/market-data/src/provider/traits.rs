//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::QuoteResult;

/// Trait for upstream quote sources.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockdesk_market_data::{MarketDataError, QuoteProvider, QuoteResult};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl QuoteProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_latest_quote(&self, ticker: &str) -> Result<QuoteResult, MarketDataError> {
///         Ok(QuoteResult::new(ticker.to_uppercase(), 1.0, 0.0, 0.0))
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "ALPHA_VANTAGE".
    ///
    /// Used in error values and log lines.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a ticker.
    ///
    /// `ticker` is passed through exactly as the caller supplied it. The
    /// returned [`QuoteResult::symbol`] is uppercased.
    ///
    /// # Errors
    ///
    /// - [`MarketDataError::UpstreamUnavailable`] if the call does not
    ///   complete with a success status
    /// - [`MarketDataError::TickerNotFound`] if it succeeds without a quote
    async fn get_latest_quote(&self, ticker: &str) -> Result<QuoteResult, MarketDataError>;
}
