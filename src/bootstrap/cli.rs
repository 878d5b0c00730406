//! Command-line overrides.

use crate::config::{load_config, validate_config, LogFormat, ServiceConfig};
use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

use super::BootstrapError;

/// Binary name used in usage and error output
pub const BIN_NAME: &str = "cart-service";

/// `cart-service` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = BIN_NAME, about = "Cart Restful Web Service", version)]
pub struct CliArgs {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Host or IP address to bind. Overrides `server.host`.
    #[arg(long, value_name = "host")]
    pub host: Option<String>,

    /// Port to bind; 0 picks a free port. Overrides `server.port`.
    #[arg(long, value_name = "port")]
    pub port: Option<u16>,

    /// Log filter directive. Overrides `logging.filter`.
    #[arg(long = "log-filter", value_name = "directive")]
    pub log_filter: Option<String>,

    /// Log output format. Overrides `logging.format`.
    #[arg(long = "log-format", value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliArgs {
    /// Parses `args`, which must not include the program name.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.into_iter().map(Into::into));
        Self::try_parse_from(argv)
    }

    /// Writes every given override into `config`.
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(filter) = &self.log_filter {
            config.logging.filter = filter.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}

/// Resolves defaults, the optional config file, and overrides into a
/// validated configuration.
pub fn resolve_config<I, T>(args: I) -> Result<ServiceConfig, BootstrapError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = CliArgs::parse_args(args)?;

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    cli.apply(&mut config);
    validate_config(&config)?;

    Ok(config)
}
