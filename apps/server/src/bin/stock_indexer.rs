//! Loads the static stock list into the search index.

use anyhow::Context;
use stockdesk_search::{load_stock_records, ElasticsearchIndex, StockIndex};
use stockdesk_server::{config::IndexerConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = IndexerConfig::from_env()?;
    init_tracing();

    let records = load_stock_records(&config.stocks_file)
        .await
        .with_context(|| format!("Failed to read {}", config.stocks_file.display()))?;
    tracing::info!(
        "Loaded {} stocks from {}",
        records.len(),
        config.stocks_file.display()
    );

    let index = ElasticsearchIndex::new(
        config.elasticsearch_host.clone(),
        config.stocks_index.clone(),
        config.request_timeout,
    );
    let indexed = index
        .bulk_index(&records)
        .await
        .context("Bulk indexing failed")?;
    index.refresh().await.context("Index refresh failed")?;

    tracing::info!(
        "Indexed {} stocks into '{}' at {}",
        indexed,
        index.index(),
        config.elasticsearch_host
    );
    Ok(())
}
