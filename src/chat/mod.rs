// Chat pipeline
// Crisis screening first, completion relay second

mod service;
mod types;

pub use service::{ChatError, ChatService, APOLOGY_MESSAGE, MESSAGE_REQUIRED};
pub use types::{ChatRequest, ChatResponse, CrisisResource};
