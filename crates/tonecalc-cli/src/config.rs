//! CLI configuration
//!
//! Settings come from an optional YAML file and are then overridden by
//! command-line flags:
//!
//! ```yaml
//! verbosity: verbose
//! log_format: json
//! log_file: /tmp/tonecalc.log
//! calculator:
//!   number_format: plain
//!   sound: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tonecalc::config::CalculatorConfig;
use tonecalc::core::NumberFormat;

use crate::commands::Cli;
use crate::error::CliResult;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - one log line per key
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }

    /// Level selected by `-q` / `-v` counts
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Option<Self> {
        if quiet {
            return Some(Self::Quiet);
        }
        match verbose {
            0 => None,
            1 => Some(Self::Verbose),
            _ => Some(Self::Debug),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Log output format
    pub log_format: LogFormat,
    /// Log file; stderr when unset
    pub log_file: Option<PathBuf>,
    /// Calculator settings
    pub calculator: CalculatorConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parses configuration from YAML text
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Builds the effective configuration: the `--config` file if given,
    /// then command-line flags on top
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line flags
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(verbosity) = Verbosity::from_flags(cli.quiet, cli.verbose) {
            self.verbosity = verbosity;
        }
        if let Some(format) = cli.log_format {
            self.log_format = format.into();
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
        if cli.plain {
            self.calculator = self.calculator.with_number_format(NumberFormat::Plain);
        }
        if cli.no_sound {
            self.calculator = self.calculator.with_sound(false);
        }
        self
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set calculator settings
    #[must_use]
    pub const fn with_calculator(mut self, calculator: CalculatorConfig) -> Self {
        self.calculator = calculator;
        self
    }
}
