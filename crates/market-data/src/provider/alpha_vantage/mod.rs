//! Alpha Vantage quote provider implementation.
//!
//! Latest quotes come from the `GLOBAL_QUOTE` endpoint:
//!
//! ```text
//! GET https://www.alphavantage.co/query?function=GLOBAL_QUOTE&symbol=MSFT&apikey=...
//!
//! {
//!     "Global Quote": {
//!         "01. symbol": "MSFT",
//!         "05. price": "100.00",
//!         "09. change": "1.00",
//!         "10. change percent": "1.00%"
//!     }
//! }
//! ```
//!
//! Note: Alpha Vantage free tier is limited to a handful of calls per
//! minute, and answers over-quota requests with HTTP 200 and no quote.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{normalize_ticker, QuoteResult};
use crate::provider::QuoteProvider;

/// Default endpoint for all Alpha Vantage functions.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

const PROVIDER_ID: &str = "ALPHA_VANTAGE";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Alpha Vantage quote provider.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// GLOBAL_QUOTE response
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// Quote fields used by the normalized result. Unknown symbols come back
/// as an empty object, so every field is optional.
#[derive(Debug, Default, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

impl GlobalQuoteResponse {
    /// Provider message explaining an empty payload, if any.
    fn diagnostic(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}

// ============================================================================
// Provider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the default endpoint and a
    /// 30 second request timeout.
    pub fn new(api_key: String) -> Self {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a provider whose HTTP client gives up after `timeout`.
    ///
    /// A timed out request surfaces as
    /// [`MarketDataError::UpstreamUnavailable`].
    pub fn with_timeout(api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The endpoint requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a request to the Alpha Vantage API and return the raw body.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::upstream(PROVIDER_ID, format!("Failed to build URL: {}", e))
        })?;

        debug!("Alpha Vantage request: {}", self.redact(url.as_str()));

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::upstream(PROVIDER_ID, "Request timed out")
            } else {
                MarketDataError::upstream(PROVIDER_ID, self.redact(&e.to_string()))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::upstream(
                PROVIDER_ID,
                format!("HTTP {}", status),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::upstream(PROVIDER_ID, self.redact(&e.to_string())))
    }

    /// Strip the API key from anything that may end up in logs or errors.
    fn redact(&self, text: &str) -> String {
        if self.api_key.is_empty() {
            return text.to_string();
        }
        text.replace(&self.api_key, "***")
    }

    /// Turn a successful GLOBAL_QUOTE body into a normalized quote.
    fn parse_global_quote(ticker: &str, body: &str) -> Result<QuoteResult, MarketDataError> {
        let response: GlobalQuoteResponse = serde_json::from_str(body).map_err(|e| {
            MarketDataError::upstream(PROVIDER_ID, format!("Invalid JSON response: {}", e))
        })?;

        let symbol = normalize_ticker(ticker);

        let fields = match response.global_quote.as_ref() {
            Some(GlobalQuote {
                price: Some(price),
                change: Some(change),
                change_percent: Some(change_percent),
            }) => (price, change, change_percent),
            _ => {
                // Invalid symbol and exhausted quota look identical here.
                match response.diagnostic() {
                    Some(msg) => warn!(
                        "Alpha Vantage returned no quote for {}: {}",
                        symbol, msg
                    ),
                    None => warn!(
                        "Alpha Vantage returned no quote for {} (unknown symbol or API limit reached)",
                        symbol
                    ),
                }
                return Err(MarketDataError::TickerNotFound(symbol));
            }
        };

        let (price, change, change_percent) = fields;

        Ok(QuoteResult::new(
            symbol,
            Self::parse_number("05. price", price)?,
            Self::parse_number("09. change", change)?,
            Self::parse_percent(change_percent).ok_or_else(|| {
                MarketDataError::upstream(
                    PROVIDER_ID,
                    format!("Invalid value for '10. change percent': {:?}", change_percent),
                )
            })?,
        ))
    }

    /// Parse a numeric field, reporting the field name on failure.
    fn parse_number(field: &str, value: &str) -> Result<f64, MarketDataError> {
        value.trim().parse::<f64>().map_err(|_| {
            MarketDataError::upstream(
                PROVIDER_ID,
                format!("Invalid value for '{}': {:?}", field, value),
            )
        })
    }

    /// Parse a percent string such as `"-0.50%"`, keeping the sign.
    fn parse_percent(value: &str) -> Option<f64> {
        value.trim().trim_end_matches('%').trim().parse::<f64>().ok()
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, ticker: &str) -> Result<QuoteResult, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", ticker)];
        let body = self.fetch(&params).await?;
        Self::parse_global_quote(ticker, &body)
    }
}
