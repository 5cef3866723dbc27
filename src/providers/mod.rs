// Completion provider support
//
// The chat relay talks to the hosted language model only through the
// `LlmProvider` trait, so the transport can be swapped (or stubbed in tests)
// without touching the relay.

use anyhow::Result;
use async_trait::async_trait;

pub mod openai;
pub mod types;

pub use openai::OpenAIProvider;
pub use types::{ProviderMessage, ProviderRequest, ProviderResponse};

/// Trait for completion providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a message and get a complete response
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
