use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("-v needs a log file: pass --log-file or set logging.file")]
    VerboseWithoutFile,

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Filter directive for a `-v` count, or `None` to use the configured level.
fn verbosity_level(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Installs the global tracing subscriber writing to `logging.file`.
///
/// `RUST_LOG` wins over `-v`, which wins over `logging.level`. Output is
/// appended without ANSI colors. The terminal belongs to the UI, so there is
/// no console fallback: without a file nothing is installed, and asking for
/// verbosity anyway is an error.
pub fn init_tracing(config: &LoggingConfig, verbosity: u8) -> Result<(), LoggingError> {
    let Some(path) = &config.file else {
        if verbosity > 0 {
            return Err(LoggingError::VerboseWithoutFile);
        }
        return Ok(());
    };

    let level = verbosity_level(verbosity).unwrap_or(config.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
