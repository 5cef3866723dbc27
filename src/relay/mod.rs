// Chat relay
// Forwards a non-crisis message to the completion provider with the fixed
// AuraMind prompt and sampling parameters.

mod prompt;

pub use prompt::SYSTEM_PROMPT;

use std::sync::Arc;
use thiserror::Error;

use crate::providers::{LlmProvider, ProviderMessage, ProviderRequest};

pub const MODEL: &str = "gpt-4.1-mini";
pub const MAX_TOKENS: u32 = 300;
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("message is empty")]
    EmptyMessage,

    /// Any failure reaching or parsing the completion service
    #[error("completion provider '{provider}' failed: {source:#}")]
    Provider {
        provider: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Clone)]
pub struct ChatRelay {
    provider: Arc<dyn LlmProvider>,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Build the two-message request for a user message
    pub fn build_request(message: &str) -> ProviderRequest {
        ProviderRequest::new(vec![
            ProviderMessage::system(SYSTEM_PROMPT),
            ProviderMessage::user(message),
        ])
        .with_model(MODEL)
        .with_max_tokens(MAX_TOKENS)
        .with_temperature(TEMPERATURE)
    }

    /// Get the model's reply text. Exactly one provider call, no retry.
    pub async fn reply(&self, message: &str) -> Result<String, RelayError> {
        if message.is_empty() {
            return Err(RelayError::EmptyMessage);
        }

        let request = Self::build_request(message);
        let response = self
            .provider
            .send_message(&request)
            .await
            .map_err(|source| RelayError::Provider {
                provider: self.provider.name().to_string(),
                source,
            })?;

        tracing::debug!(
            provider = %response.provider,
            model = %response.model,
            finish_reason = ?response.finish_reason,
            "Relay reply received"
        );

        Ok(response.text)
    }
}
