use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use stockdesk_agent::{generate_reply, GenerateRequest, GenerateResponse};

use crate::{error::ApiResult, main_lib::AgentState};

/// Answer a single prompt.
async fn generate(
    State(state): State<Arc<AgentState>>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let reply = generate_reply(state.agent.as_ref(), request).await?;
    Ok(Json(reply))
}

pub fn router() -> Router<Arc<AgentState>> {
    Router::new().route("/generate", post(generate))
}
