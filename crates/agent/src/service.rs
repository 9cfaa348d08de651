//! Request handling for `POST /generate`.

use log::debug;

use crate::agent::AgentTrait;
use crate::error::AgentError;
use crate::types::{GenerateRequest, GenerateResponse};

/// Answer a generate request.
///
/// A missing or blank prompt gets the fixed [`GenerateResponse::no_prompt`]
/// reply and never reaches the agent.
pub async fn generate_reply(
    agent: &dyn AgentTrait,
    request: GenerateRequest,
) -> Result<GenerateResponse, AgentError> {
    let prompt = match request.prompt.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => {
            debug!("Generate request without prompt");
            return Ok(GenerateResponse::no_prompt());
        }
    };

    agent.generate(prompt).await
}
