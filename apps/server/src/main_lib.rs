use std::sync::Arc;

use stockdesk_agent::{AgentTrait, GeminiAgent};
use stockdesk_market_data::{AlphaVantageProvider, CachedQuoteFetcher, SharedQuoteFetcher};
use stockdesk_search::{ElasticsearchIndex, StockIndex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AgentConfig, QuoteConfig};

/// Quote and search service state.
pub struct AppState {
    pub quote_fetcher: SharedQuoteFetcher,
    pub stock_index: Arc<dyn StockIndex>,
}

/// Agent service state.
pub struct AgentState {
    pub agent: Arc<dyn AgentTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("STOCKDESK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &QuoteConfig) -> Arc<AppState> {
    let provider = AlphaVantageProvider::with_timeout(
        config.alpha_api_key.clone(),
        config.upstream_timeout,
    )
    .with_base_url(config.alpha_base_url.clone());
    let quote_fetcher = Arc::new(CachedQuoteFetcher::new(Arc::new(provider), config.cache_ttl));
    tracing::info!(
        "Quote cache TTL {}s, upstream timeout {}s",
        config.cache_ttl.as_secs(),
        config.upstream_timeout.as_secs()
    );

    let stock_index = Arc::new(ElasticsearchIndex::new(
        config.elasticsearch_host.clone(),
        config.stocks_index.clone(),
        config.search_timeout,
    ));
    tracing::info!(
        "Searching index '{}' at {}",
        config.stocks_index,
        config.elasticsearch_host
    );

    Arc::new(AppState {
        quote_fetcher,
        stock_index,
    })
}

pub fn build_agent_state(config: &AgentConfig) -> anyhow::Result<Arc<AgentState>> {
    let settings = stockdesk_agent::AgentConfig {
        model: config.model.clone(),
        google_search: config.google_search,
        ..Default::default()
    };
    let agent = GeminiAgent::new(config.google_api_key.clone(), settings)?;
    tracing::info!(
        "Agent model {} (google search: {})",
        config.model,
        config.google_search
    );

    Ok(Arc::new(AgentState {
        agent: Arc::new(agent),
    }))
}
