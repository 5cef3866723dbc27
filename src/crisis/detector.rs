// Crisis keyword detector

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Built-in keyword list, checked in this order against the lowercased message
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "better off dead",
    "hurt myself",
    "self harm",
    "cut myself",
    "overdose",
    "pills",
    "jump off",
    "hang myself",
    "gun",
    "knife",
    "razor",
    "abuse",
    "hitting me",
    "hurting me",
    "touching me",
];

/// Substring screen for self-harm, suicidal ideation and abuse content.
///
/// Matching is plain substring containment on the lowercased message, so
/// "gun" also matches "begun". There is no word-boundary check.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    keywords: Vec<String>,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self {
            keywords: CRISIS_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl CrisisDetector {
    /// Load a replacement keyword list from a JSON array of strings
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crisis keywords file: {}", path.display()))?;

        let keywords: Vec<String> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse crisis keywords: {}", path.display()))?;

        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            bail!("Crisis keywords file {} has no keywords", path.display());
        }

        Ok(Self { keywords })
    }

    /// Detect if the message contains any crisis keyword
    pub fn detect_crisis(&self, message: &str) -> bool {
        match self.matched_keyword(message) {
            Some(keyword) => {
                tracing::warn!(keyword = %keyword, "Crisis detected");
                true
            }
            None => false,
        }
    }

    /// First keyword (in scan order) found in the message
    pub fn matched_keyword(&self, message: &str) -> Option<&str> {
        let message_lower = message.to_lowercase();

        self.keywords
            .iter()
            .find(|keyword| message_lower.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_crisis_detection() {
        let detector = CrisisDetector::default();

        assert!(detector.detect_crisis("I'm thinking about suicide"));
        assert!(detector.detect_crisis("I want to kill myself"));
        assert!(detector.detect_crisis("my dad keeps hitting me"));
        assert!(!detector.detect_crisis("What is the meaning of life?"));
        assert!(!detector.detect_crisis("I had a rough day at school"));
    }

    #[test]
    fn test_case_insensitive() {
        let detector = CrisisDetector::default();

        assert!(detector.detect_crisis("SUICIDE"));
        assert!(detector.detect_crisis("SuIcIdE"));
        assert!(detector.detect_crisis("I Want To Die"));
    }

    #[test]
    fn test_every_builtin_keyword_matches() {
        let detector = CrisisDetector::default();

        for keyword in CRISIS_KEYWORDS {
            let message = format!("lately {} is all I think about", keyword.to_uppercase());
            assert!(detector.detect_crisis(&message), "missed '{}'", keyword);
        }
    }

    #[test]
    fn test_substring_match_without_word_boundaries() {
        let detector = CrisisDetector::default();

        // Existing behavior: "gun" inside "begun", "pills" inside "spills"
        assert!(detector.detect_crisis("The semester has begun"));
        assert_eq!(detector.matched_keyword("coffee spills everywhere"), Some("pills"));
    }

    #[test]
    fn test_matched_keyword_follows_scan_order() {
        let detector = CrisisDetector::default();

        assert_eq!(
            detector.matched_keyword("a knife and thoughts of suicide"),
            Some("suicide")
        );
        assert_eq!(detector.matched_keyword("hello there"), None);
        assert_eq!(detector.matched_keyword(""), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Hopeless", "give up"]"#).unwrap();

        let detector = CrisisDetector::load_from_file(file.path()).unwrap();
        assert_eq!(detector.keywords(), &["hopeless".to_string(), "give up".to_string()]);
        assert!(detector.detect_crisis("I feel HOPELESS"));
        assert!(!detector.detect_crisis("I want to kill myself"));
    }

    #[test]
    fn test_load_from_file_rejects_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        assert!(CrisisDetector::load_from_file(file.path()).is_err());
    }
}
