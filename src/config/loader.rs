use tracing::{debug, warn};

use super::config_model::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "page-testgen.yaml";

/// Load config from a YAML file. Returns defaults if the file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => {
            debug!(path = config_path, "no config file, using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, serde_yaml::Error> {
    // An empty document deserializes to unit, not a map
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_yaml::from_str(content)
}
