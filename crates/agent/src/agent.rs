//! Single-turn agent.
//!
//! Each `generate` call builds a fresh rig agent and prompts it once; no
//! conversation state survives between calls.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::gemini};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::error::AgentError;
use crate::types::GenerateResponse;

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// System instruction given to every agent.
pub const DEFAULT_INSTRUCTION: &str =
    "You are a helpful assistant. Use Google Search for current info or if unsure.";

// ============================================================================
// Trait for dependency injection
// ============================================================================

/// Produces a reply for a single prompt.
#[async_trait]
pub trait AgentTrait: Send + Sync {
    /// Answer `prompt`. The prompt is expected to be non-blank.
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, AgentError>;
}

// ============================================================================
// Configuration
// ============================================================================

/// Agent settings.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub model: String,
    pub instruction: String,
    /// Ground answers with the Gemini Google Search tool.
    pub google_search: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            instruction: DEFAULT_INSTRUCTION.to_string(),
            google_search: true,
        }
    }
}

impl AgentConfig {
    /// Extra request parameters forwarded to Gemini.
    fn additional_params(&self) -> Option<serde_json::Value> {
        self.google_search
            .then(|| json!({ "tools": [{ "google_search": {} }] }))
    }
}

// ============================================================================
// Gemini implementation
// ============================================================================

/// Gemini-backed agent.
pub struct GeminiAgent {
    client: gemini::Client<HttpClient>,
    config: AgentConfig,
}

impl GeminiAgent {
    /// Create an agent with the given API key.
    pub fn new(api_key: String, config: AgentConfig) -> Result<Self, AgentError> {
        if api_key.trim().is_empty() {
            return Err(AgentError::MissingApiKey("gemini".to_string()));
        }

        let client: gemini::Client<HttpClient> =
            gemini::Client::new(&api_key).map_err(|e| AgentError::Provider(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Short identifier tying together the log lines of one call.
fn new_session_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("single_turn_{}", &id[..8])
}

#[async_trait]
impl AgentTrait for GeminiAgent {
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, AgentError> {
        let session_id = new_session_id();
        info!(
            "Agent session {} started (model: {}, google_search: {})",
            session_id, self.config.model, self.config.google_search
        );

        let mut builder = self
            .client
            .agent(&self.config.model)
            .preamble(&self.config.instruction);
        if let Some(params) = self.config.additional_params() {
            builder = builder.additional_params(params);
        }
        let agent = builder.build();

        let prompt = prompt.to_string();
        let text = agent.prompt(&prompt).await.map_err(|e| {
            warn!("Agent session {} failed: {}", session_id, e);
            AgentError::Provider(e.to_string())
        })?;

        debug!(
            "Agent session {} finished ({} chars)",
            session_id,
            text.len()
        );

        Ok(GenerateResponse::text(text))
    }
}

// ============================================================================
// Fake implementation for testing
// ============================================================================

/// Agent with a canned reply, for tests and local runs without an API key.
pub struct FakeAgent {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl FakeAgent {
    /// Always answer with `text`.
    pub fn with_reply(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with a provider error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgentTrait for FakeAgent {
    async fn generate(&self, _prompt: &str) -> Result<GenerateResponse, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(GenerateResponse::text(text.clone())),
            Err(message) => Err(AgentError::provider(message.clone())),
        }
    }
}
