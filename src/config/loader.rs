// Configuration loader
// Reads ~/.auramind/config.toml when present, then applies environment overrides

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::settings::Config;

/// Load configuration from the AuraMind config file and environment
pub fn load_config() -> Result<Config> {
    let config_path = dirs::home_dir()
        .context("Could not determine home directory")?
        .join(".auramind/config.toml");

    let config = load_config_from(&config_path)?;
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Load a config file, falling back to defaults when it does not exist
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn apply_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(bind) = var("AURAMIND_BIND").filter(|v| !v.is_empty()) {
        config.bind_address = bind;
    }
    if let Some(base_url) = var("OPENAI_BASE_URL").filter(|v| !v.is_empty()) {
        config.openai_base_url = base_url;
    }
    if let Some(debug) = var("AURAMIND_DEBUG") {
        config.debug_logging = debug == "1" || debug.eq_ignore_ascii_case("true");
    }
    config
}
