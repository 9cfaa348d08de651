//! Stockdesk Agent - single-turn LLM agent using rig-core.
//!
//! Wraps an external LLM (Gemini, optionally grounded with Google Search)
//! behind [`AgentTrait`] so the HTTP layer can be tested with
//! [`FakeAgent`].
//!
//! # Architecture
//!
//! - `agent`: `AgentTrait`, the Gemini-backed implementation and a fake
//! - `service`: request handling shared by the HTTP layer (prompt validation)
//! - `types`: `/generate` request and response DTOs
//! - `error`: `AgentError`
//!
//! # Example
//!
//! ```ignore
//! use stockdesk_agent::{generate_reply, AgentConfig, GeminiAgent, GenerateRequest};
//!
//! let agent = GeminiAgent::new(api_key, AgentConfig::default())?;
//! let reply = generate_reply(&agent, GenerateRequest::new("What moved AAPL today?")).await?;
//! println!("{}", reply.text);
//! ```

pub mod agent;
pub mod error;
pub mod service;
pub mod types;

pub use agent::{AgentConfig, AgentTrait, FakeAgent, GeminiAgent, DEFAULT_INSTRUCTION, DEFAULT_MODEL};
pub use error::AgentError;
pub use service::generate_reply;
pub use types::{GenerateRequest, GenerateResponse, Source, NO_PROMPT_TEXT};
