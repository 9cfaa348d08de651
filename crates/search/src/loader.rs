//! Static stock list loading and bulk request encoding.

use log::info;
use serde_json::json;
use std::path::Path;

use crate::errors::SearchError;
use crate::models::{StockDocument, StockRecord};

/// Read the stock list: a JSON array of `{"symbol": ..., "name": ...}`.
pub async fn load_stock_records(path: impl AsRef<Path>) -> Result<Vec<StockRecord>, SearchError> {
    let path = path.as_ref();
    let raw = tokio::fs::read(path).await?;
    let records: Vec<StockRecord> = serde_json::from_slice(&raw)?;
    info!("Loaded {} stock records from {}", records.len(), path.display());
    Ok(records)
}

/// Encode records as an NDJSON `_bulk` body.
///
/// Each record becomes an `index` action with `_id` = symbol, so reloading
/// the same file replaces documents instead of duplicating them.
pub fn bulk_body(index: &str, records: &[StockRecord]) -> Result<String, SearchError> {
    let mut body = String::new();
    for record in records {
        let action = json!({ "index": { "_index": index, "_id": record.symbol } });
        body.push_str(&serde_json::to_string(&action)?);
        body.push('\n');
        body.push_str(&serde_json::to_string(&StockDocument::from(record))?);
        body.push('\n');
    }
    Ok(body)
}
