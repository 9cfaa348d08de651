//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for all quote operations
//! - [`RetryClass`]: Whether the caller may usefully retry

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching a quote.
///
/// Nothing is retried inside the crate. Each variant is classified via
/// [`retry_class`](Self::retry_class) so the caller can decide.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The ticker supplied by the caller was empty or blank.
    #[error("Invalid ticker: {0:?}")]
    InvalidTicker(String),

    /// The provider answered successfully but without a usable quote.
    ///
    /// Alpha Vantage reports unknown symbols and exhausted quotas with the
    /// same empty payload, so this variant covers both.
    #[error("Ticker not found or API limit reached: {0}")]
    TickerNotFound(String),

    /// The provider could not be reached, timed out, returned a non-success
    /// status or sent a body that could not be read as a quote.
    #[error("Upstream unavailable: {provider} - {message}")]
    UpstreamUnavailable {
        /// The provider that failed
        provider: String,
        /// What went wrong
        message: String,
    },
}

impl MarketDataError {
    /// Build an [`UpstreamUnavailable`](Self::UpstreamUnavailable) error.
    pub fn upstream(provider: &str, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// ```
    /// use stockdesk_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::upstream("ALPHA_VANTAGE", "HTTP 503");
    /// assert_eq!(error.retry_class(), RetryClass::Caller);
    ///
    /// let error = MarketDataError::TickerNotFound("NOPE".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::UpstreamUnavailable { .. } => RetryClass::Caller,
            Self::TickerNotFound(_) | Self::InvalidTicker(_) => RetryClass::Never,
        }
    }
}
