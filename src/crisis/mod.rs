// Crisis screening
// Keyword detection and the fixed crisis-resource reply

mod detector;
mod response;

pub use detector::{CrisisDetector, CRISIS_KEYWORDS};
pub use response::{crisis_response, CRISIS_MESSAGE};
