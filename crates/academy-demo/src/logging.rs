//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the UI in interactive mode, so logs go to a file
//! (`--log-file`) or nowhere. Snapshot mode may log to stderr since stdout
//! carries the rendered frame.
//!
//! The filter comes from `ACADEMY_LOG` when set, else from the `[logging]`
//! config table.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use academy::runtime::LoggingConfig;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "ACADEMY_LOG";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// Append to a file.
    File(&'a Path),
    Stderr,
    /// Install no subscriber.
    Disabled,
}

/// Parse an `EnvFilter` directive.
pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|err| CliError::Logging(format!("bad filter {directive:?}: {err}")))
}

/// `ACADEMY_LOG` if set and valid, else the configured directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(&config.filter),
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LoggingConfig, sink: LogSink<'_>) -> Result<()> {
    match sink {
        LogSink::Disabled => Ok(()),
        LogSink::Stderr => install(build_filter(config)?, config.json, true, std::io::stderr),
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            install(build_filter(config)?, config.json, false, Mutex::new(file))
        }
    }
}

fn install<W>(filter: EnvFilter, json: bool, ansi: bool, writer: W) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(ansi).with_writer(writer))
            .try_init()
    };
    result.map_err(|err| CliError::Logging(err.to_string()))
}
