use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockdesk_search::{StockHit, MAX_HITS};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct SearchParams {
    query: Option<String>,
}

/// Search stocks by symbol or name.
///
/// Search backend failures are logged and answered with an empty list.
async fn search_stocks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<StockHit>>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("query must not be empty".to_string()))?;

    match state.stock_index.search(&query).await {
        Ok(mut hits) => {
            hits.truncate(MAX_HITS);
            Ok(Json(hits))
        }
        Err(e) => {
            tracing::error!("Search for {:?} failed: {}", query, e);
            Ok(Json(Vec::new()))
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search_stocks))
}
