//! Configuration loading from disk.

use crate::config::schema::ServiceConfig;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ServiceConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Checks values serde cannot reject on its own.
pub fn validate_config(config: &ServiceConfig) -> Result<(), ConfigError> {
    if config.server.host.trim().is_empty() {
        return Err(ConfigError::Invalid("server.host must not be empty".into()));
    }
    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "logging.filter must not be empty".into(),
        ));
    }
    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        return Err(ConfigError::Invalid(format!(
            "logging.filter '{}': {e}",
            config.logging.filter
        )));
    }
    Ok(())
}
