// Configuration structs

use serde::Deserialize;
use std::path::PathBuf;

use crate::providers::openai::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bind address (e.g., "127.0.0.1:5000")
    pub bind_address: String,

    /// Completion API root; the relay posts to {base}/v1/chat/completions
    pub openai_base_url: String,

    /// JSON array of keywords replacing the built-in crisis list
    pub crisis_keywords_path: Option<PathBuf>,

    /// Append logs here instead of stderr
    pub log_file: Option<PathBuf>,

    /// Raise the default log level to debug
    pub debug_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            crisis_keywords_path: None,
            log_file: None,
            debug_logging: false,
        }
    }
}
