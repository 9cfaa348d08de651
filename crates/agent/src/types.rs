//! `/generate` request and response DTOs.

use serde::{Deserialize, Serialize};

/// Reply text used when the request carries no prompt.
pub const NO_PROMPT_TEXT: &str = "No prompt provided.";

/// Body of `POST /generate`.
///
/// `prompt` is optional on the wire: a missing prompt is answered with
/// [`NO_PROMPT_TEXT`] rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }
}

/// A web source the answer was grounded on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

/// Reply of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl GenerateResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }

    /// Fixed reply for an empty request.
    pub fn no_prompt() -> Self {
        Self::text(NO_PROMPT_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_prompt_deserializes() {
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_none());

        let req: GenerateRequest = serde_json::from_str(r#"{"prompt": null}"#).unwrap();
        assert!(req.prompt.is_none());
    }

    #[test]
    fn test_no_prompt_response_shape() {
        let json = serde_json::to_value(GenerateResponse::no_prompt()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "No prompt provided.", "sources": [] })
        );
    }
}
