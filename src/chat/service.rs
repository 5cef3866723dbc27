// Chat request pipeline
//
// Empty check, then crisis screen, then relay. The crisis path never touches
// the completion provider, so it answers even when the provider is down.

use thiserror::Error;

use super::types::ChatResponse;
use crate::crisis::{crisis_response, CrisisDetector};
use crate::relay::{ChatRelay, RelayError};

pub const MESSAGE_REQUIRED: &str = "Message is required";

pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I'm having trouble responding right now. Please try again in a moment.";

#[derive(Debug, Error)]
pub enum ChatError {
    /// Missing or empty message (client error)
    #[error("{}", MESSAGE_REQUIRED)]
    MessageRequired,

    /// Completion service failure; detail is for logs only
    #[error("completion service unavailable")]
    Upstream(#[source] RelayError),
}

impl From<RelayError> for ChatError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::EmptyMessage => ChatError::MessageRequired,
            other => ChatError::Upstream(other),
        }
    }
}

#[derive(Clone)]
pub struct ChatService {
    detector: CrisisDetector,
    relay: ChatRelay,
}

impl ChatService {
    pub fn new(detector: CrisisDetector, relay: ChatRelay) -> Self {
        Self { detector, relay }
    }

    /// Handle one user message
    pub async fn handle(&self, message: &str) -> Result<ChatResponse, ChatError> {
        if message.is_empty() {
            return Err(ChatError::MessageRequired);
        }

        if self.detector.detect_crisis(message) {
            return Ok(crisis_response());
        }

        match self.relay.reply(message).await {
            Ok(text) => Ok(ChatResponse::reply(text)),
            Err(err) => {
                tracing::error!(error = %err, "Error in chat relay");
                Err(err.into())
            }
        }
    }
}
