mod agent;
mod health;
mod search;
mod stocks;

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    main_lib::{AgentState, AppState},
};

/// Router of the quote service: `/stocks/{ticker}`, `/search`, `/health`.
pub fn quote_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(stocks::router())
        .merge(search::router())
        .merge(health::router())
        .with_state(state);

    with_layers(api, config)
}

/// Router of the agent service: `/generate`, `/health`.
pub fn agent_router(state: Arc<AgentState>, config: &Config) -> Router {
    let api = Router::new()
        .merge(agent::router())
        .merge(health::router())
        .with_state(state);

    with_layers(api, config)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any).allow_headers(Any);
    }

    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins).allow_headers(Any)
}

fn with_layers(router: Router, config: &Config) -> Router {
    router
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
