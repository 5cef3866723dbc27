// Request/response types for the completion provider
//
// These are provider-agnostic; each provider implementation converts them
// into its own wire format.

use serde::{Deserialize, Serialize};

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderMessage {
    pub role: String,
    pub content: String,
}

impl ProviderMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Unified request format for completion providers
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRequest {
    /// Conversation messages, system instruction first
    pub messages: Vec<ProviderMessage>,

    /// Model name (provider-specific)
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    /// Create a new request from messages
    pub fn new(messages: Vec<ProviderMessage>) -> Self {
        Self {
            messages,
            model: String::new(), // Will be set by provider
            max_tokens: 4096,
            temperature: None,
        }
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Unified response format from completion providers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderResponse {
    /// Response ID (provider-specific)
    pub id: String,

    /// Model that generated the response
    pub model: String,

    /// Generated text
    pub text: String,

    /// Why the model stopped generating
    pub finish_reason: Option<String>,

    /// Provider name (e.g., "openai")
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ProviderRequest::new(vec![
            ProviderMessage::system("be kind"),
            ProviderMessage::user("hi"),
        ])
        .with_model("gpt-4.1-mini")
        .with_max_tokens(300)
        .with_temperature(0.7);

        assert_eq!(request.model, "gpt-4.1-mini");
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
    }
}
