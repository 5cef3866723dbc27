// Fixed reply for messages flagged by the detector

use crate::chat::{ChatResponse, CrisisResource};

pub const CRISIS_MESSAGE: &str = "I'm really concerned about what you've shared. Your safety is the most important thing right now. Please reach out to someone who can help immediately:\n\n\
🚨 **Emergency: Call 911**\n\
📞 **Suicide Prevention: Call or text 988**\n\
💬 **Crisis Text Line: Text HOME to 741741**\n\n\
You don't have to go through this alone. There are people who want to help you.";

/// Build the crisis intervention response.
///
/// Always the same advisory text and the same three contacts; the completion
/// service is never consulted once a crisis is detected.
pub fn crisis_response() -> ChatResponse {
    ChatResponse {
        message: CRISIS_MESSAGE.to_string(),
        is_crisis: true,
        resources: Some(vec![
            CrisisResource::new("Emergency Services", "911"),
            CrisisResource::new("Suicide Prevention Lifeline", "988"),
            CrisisResource::new("Crisis Text Line", "Text HOME to 741741"),
        ]),
    }
}
