// Request/response bodies for the chat endpoint

use serde::{Deserialize, Serialize};

/// Request body for POST /chat
///
/// A body that does not deserialize (not JSON, or `message` of the wrong
/// type such as a number) is rejected by the handler with the same
/// 400 "Message is required" as a missing message; the rejection detail is
/// logged at warn.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// Raw user input; missing or null is treated as empty
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Message text, empty when absent
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Response body for a handled chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub is_crisis: bool,
    /// Only present on crisis replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<CrisisResource>>,
}

impl ChatResponse {
    /// Ordinary model reply
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_crisis: false,
            resources: None,
        }
    }
}

/// Emergency contact attached to a crisis reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisResource {
    pub name: String,
    pub contact: String,
}

impl CrisisResource {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }
}
