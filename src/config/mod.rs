//! Service Configuration Module
//!
//! Configuration is resolved once at startup from three layers, lowest
//! precedence first:
//! - built-in defaults
//! - an optional TOML file
//! - command-line overrides

pub mod loader;
pub mod schema;

pub use loader::{load_config, validate_config, ConfigError};
pub use schema::{LogFormat, LoggingConfig, ServerConfig, ServiceConfig};
