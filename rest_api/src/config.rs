// rest_api/src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use lib::config::{DEFAULT_BATCH_SIZE, DEFAULT_DEPTH, MAX_BATCH_SIZE, MIN_BATCH_SIZE};

/// Configuration for the REST API server, loaded from
/// `rest_api_config.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RestApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// JSON file holding the flat element snapshot served at startup.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "default_depth")]
    pub default_depth: usize,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for RestApiConfig {
    fn default() -> Self {
        RestApiConfig {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            default_depth: default_depth(),
            batch_size: default_batch_size(),
        }
    }
}

// The config file nests everything under a 'rest_api:' key.
#[derive(Debug, Deserialize)]
struct RestApiConfigWrapper {
    rest_api: RestApiConfig,
}

/// Loads the server configuration. An explicit path must exist and
/// parse; with no path, a missing `rest_api_config.yaml` falls back to
/// defaults.
pub fn load_rest_api_config(config_file_path: Option<PathBuf>) -> Result<RestApiConfig> {
    let explicit = config_file_path.is_some();
    let path = config_file_path.unwrap_or_else(|| PathBuf::from("rest_api_config.yaml"));

    if !path.exists() && !explicit {
        return Ok(RestApiConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read REST API config file: {}", path.display()))?;
    let wrapper: RestApiConfigWrapper = serde_yaml2::from_str(&content)
        .with_context(|| format!("Failed to parse REST API config file: {}", path.display()))?;

    let mut config = wrapper.rest_api;
    config.batch_size = config.batch_size.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE);
    if config.default_depth == 0 {
        config.default_depth = 1;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let config = load_rest_api_config(None).unwrap();
        assert_eq!(config.port, 8082);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.default_depth, DEFAULT_DEPTH);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_rest_api_config(Some(PathBuf::from("/nonexistent/config.yaml")));
        assert!(result.is_err());
    }
}
