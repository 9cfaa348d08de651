//! Agent error types.

use thiserror::Error;

/// Agent errors.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Missing API key for the provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or the LLM API).
    #[error("Provider error: {0}")]
    Provider(String),
}

impl AgentError {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AgentError::provider("quota exceeded").to_string(),
            "Provider error: quota exceeded"
        );
        assert_eq!(
            AgentError::MissingApiKey("gemini".into()).to_string(),
            "Missing API key for provider gemini"
        );
    }
}
