//! tonecalc CLI library
//!
//! Command-line front-end for the tonecalc calculator widget: an
//! interactive terminal calculator plus scripted `run` and `format`
//! commands.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod bell;
mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;
pub mod terminal;

pub use bell::TerminalBell;
pub use commands::{Cli, Commands, FormatArgs, LogFormatArg, RunArgs};
pub use config::{CliConfig, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::LogTarget;
