use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stockdesk_market_data::QuoteResult;

use crate::{error::ApiResult, main_lib::AppState};

/// Latest quote for a ticker, served from the cache while fresh.
async fn get_stock(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> ApiResult<Json<QuoteResult>> {
    let quote = state.quote_fetcher.fetch_quote(&ticker).await?;
    Ok(Json(quote))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stocks/{ticker}", get(get_stock))
}
