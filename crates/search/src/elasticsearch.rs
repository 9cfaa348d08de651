//! Elasticsearch REST implementation of [`StockIndex`].
//!
//! Only three endpoints are used:
//! - `POST /{index}/_search`
//! - `POST /_bulk` (NDJSON)
//! - `POST /{index}/_refresh`

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::errors::SearchError;
use crate::loader::bulk_body;
use crate::models::{StockHit, StockRecord};
use crate::query::build_search_body;
use crate::traits::StockIndex;

/// Default Elasticsearch address inside the compose network.
pub const DEFAULT_HOST: &str = "http://elasticsearch:9200";

/// Longest response body kept in error messages.
const MAX_ERROR_BODY: usize = 512;

/// Stock index backed by an Elasticsearch cluster.
pub struct ElasticsearchIndex {
    client: Client,
    host: String,
    index: String,
}

// ============================================================================
// Response structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: HitSource,
}

#[derive(Debug, Deserialize)]
struct HitSource {
    symbol: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BulkResponse {
    errors: bool,
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

impl ElasticsearchIndex {
    /// Create a client for `index` on the cluster at `host`.
    ///
    /// `timeout` bounds every request made by this client.
    pub fn new(host: impl Into<String>, index: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
            index: index.into(),
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.host, path)
    }

    /// Fail on non-success statuses, keeping a bounded slice of the body.
    async fn check_status(response: Response) -> Result<Response, SearchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
        }

        Err(SearchError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Map raw hits to results, dropping documents without a symbol.
    fn collect_hits(response: SearchResponse) -> Vec<StockHit> {
        response
            .hits
            .hits
            .into_iter()
            .filter_map(|hit| {
                let symbol = hit.source.symbol?;
                Some(StockHit::new(symbol, hit.source.name.unwrap_or_default()))
            })
            .collect()
    }

    /// First rejected item in a bulk response, for the error message.
    fn first_bulk_error(items: &[serde_json::Value]) -> (usize, String) {
        let failed: Vec<&serde_json::Value> = items
            .iter()
            .filter_map(|item| item.get("index"))
            .filter(|action| action.get("error").is_some())
            .collect();

        let first = failed
            .first()
            .and_then(|action| action.get("error"))
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());

        (failed.len(), first)
    }
}

#[async_trait]
impl StockIndex for ElasticsearchIndex {
    async fn search(&self, query: &str) -> Result<Vec<StockHit>, SearchError> {
        let body = build_search_body(query);
        debug!("Searching '{}' for {:?}", self.index, query);

        let response = self
            .client
            .post(self.url(&format!("{}/_search", self.index)))
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: SearchResponse = serde_json::from_slice(&response.bytes().await?)?;
        Ok(Self::collect_hits(parsed))
    }

    async fn bulk_index(&self, records: &[StockRecord]) -> Result<usize, SearchError> {
        if records.is_empty() {
            return Ok(0);
        }

        let body = bulk_body(&self.index, records)?;
        let response = self
            .client
            .post(self.url("_bulk"))
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: BulkResponse = serde_json::from_slice(&response.bytes().await?)?;
        if parsed.errors {
            let (failed, first_error) = Self::first_bulk_error(&parsed.items);
            warn!(
                "Bulk indexing into '{}' rejected {} documents",
                self.index, failed
            );
            return Err(SearchError::Bulk {
                failed,
                total: records.len(),
                first_error,
            });
        }

        Ok(records.len())
    }

    async fn refresh(&self) -> Result<(), SearchError> {
        let response = self
            .client
            .post(self.url(&format!("{}/_refresh", self.index)))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_trailing_slash_trimmed() {
        let index = ElasticsearchIndex::new("http://localhost:9200/", "stocks", Duration::from_secs(5));
        assert_eq!(index.url("stocks/_search"), "http://localhost:9200/stocks/_search");
    }

    #[test]
    fn test_collect_hits_skips_missing_symbol() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "hits": {
                "total": { "value": 3 },
                "hits": [
                    { "_id": "AAPL", "_source": { "symbol": "AAPL", "name": "Apple Inc." } },
                    { "_id": "X", "_source": { "name": "No symbol" } },
                    { "_id": "IBM", "_source": { "symbol": "IBM" } }
                ]
            }
        }))
        .unwrap();

        let hits = ElasticsearchIndex::collect_hits(response);
        assert_eq!(
            hits,
            vec![StockHit::new("AAPL", "Apple Inc."), StockHit::new("IBM", "")]
        );
    }

    #[test]
    fn test_first_bulk_error() {
        let items = vec![
            serde_json::json!({ "index": { "_id": "AAPL", "status": 201 } }),
            serde_json::json!({ "index": { "_id": "BAD", "status": 400, "error": { "type": "mapper_parsing_exception" } } }),
        ];

        let (failed, first) = ElasticsearchIndex::first_bulk_error(&items);
        assert_eq!(failed, 1);
        assert!(first.contains("mapper_parsing_exception"));
    }
}
