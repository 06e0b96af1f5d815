//! Log subscriber setup
//!
//! `RUST_LOG` wins over the verbosity flags when set.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, LogFormat};
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Dropped
    Discard,
}

impl LogTarget {
    /// Target for a command; the terminal UI owns the screen so it never
    /// logs to stderr
    #[must_use]
    pub fn for_command(config: &CliConfig, interactive: bool) -> Self {
        match (&config.log_file, interactive) {
            (Some(path), _) => Self::File(path.clone()),
            (None, true) => Self::Discard,
            (None, false) => Self::Stderr,
        }
    }

    fn writer(&self) -> CliResult<BoxMakeWriter> {
        Ok(match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            Self::Discard => BoxMakeWriter::new(std::io::sink),
        })
    }
}

/// Filter from `RUST_LOG`, or from the configured verbosity
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_level()))
}

/// Installs the global subscriber
pub fn init(config: &CliConfig, target: &LogTarget) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(target.writer()?)
        .with_ansi(matches!(target, LogTarget::Stderr))
        .with_target(false);

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| CliError::config(format!("failed to install logger: {e}")))
}
