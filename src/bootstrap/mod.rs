//! Service Bootstrap Module
//!
//! Turns a sequence of startup arguments into a running service:
//! - Argument parsing and configuration resolution
//! - Logging initialisation
//! - Listener binding and serving with graceful shutdown
//!
//! Startup failures are returned to the caller, never retried.

pub mod application;
pub mod cli;

pub use application::Application;
pub use cli::{resolve_config, CliArgs};

use crate::config::ConfigError;
use std::ffi::OsString;

/// Failures on the path from `not-started` to `running`.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Arguments(#[from] clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl BootstrapError {
    /// Process exit status for this failure.
    ///
    /// Argument errors use clap's status (`0` for `--help`/`--version`,
    /// `2` for usage errors); everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::Arguments(e) => e.exit_code(),
            _ => 1,
        }
    }
}

/// Starts the service.
///
/// `args` are the startup arguments without the program name. On success the
/// returned [`Application`] holds the bound listener; on failure nothing is
/// left listening.
pub async fn start<I, T>(args: I) -> Result<Application, BootstrapError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = resolve_config(args)?;
    crate::telemetry::init_tracing(&config.logging);

    Application::build(config).await
}
