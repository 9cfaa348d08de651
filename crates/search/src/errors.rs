//! Search error types.

use thiserror::Error;

/// Errors from the search index or the stock file.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search engine could not be reached or the request failed in transit.
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The search engine answered with a non-success status.
    #[error("Search engine returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    /// A bulk request was accepted but some items were rejected.
    #[error("Bulk indexing rejected {failed} of {total} documents: {first_error}")]
    Bulk {
        failed: usize,
        total: usize,
        first_error: String,
    },

    /// The stock file could not be read.
    #[error("Failed to read stock file: {0}")]
    Io(#[from] std::io::Error),

    /// The stock file or a response body was not the expected JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
