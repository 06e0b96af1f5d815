//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::LogFormat;

/// tonecalc: keypad calculator with tone feedback
#[derive(Parser, Debug)]
#[command(name = "tonecalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "TONECALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show results without thousands separators
    #[arg(long, global = true)]
    pub plain: bool,

    /// Disable key tones
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log format
    #[arg(long, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive terminal calculator
    Tui,

    /// Press a sequence of keys and print the display
    Run(RunArgs),

    /// Format a number the way the display shows it
    Format(FormatArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Treat tokens as keyboard key names (Enter, Escape, Backspace, ...)
    #[arg(short, long)]
    pub keys: bool,

    /// Print the display as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Button values (`7`, `+`, `=`, `C`, `Backspace`, `%`) or runs of
    /// button characters such as `12+30=`
    #[arg(required = true, num_args = 1..)]
    pub tokens: Vec<String>,
}

/// Arguments for the format command
#[derive(Parser, Debug, Clone)]
pub struct FormatArgs {
    /// Number to format
    #[arg(allow_negative_numbers = true)]
    pub value: String,
}

/// Log format argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["tonecalc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_run_tokens() {
        let cli = Cli::try_parse_from(["tonecalc", "run", "12", "+", "3", "="]).unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.tokens, ["12", "+", "3", "="]);
                assert!(!args.keys);
                assert!(!args.json);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_run_accepts_minus_token() {
        let cli = Cli::try_parse_from(["tonecalc", "run", "9", "-", "4", "="]).unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.tokens[1], "-");
    }

    #[test]
    fn test_run_requires_tokens() {
        assert!(Cli::try_parse_from(["tonecalc", "run"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tonecalc",
            "run",
            "--plain",
            "--no-sound",
            "-vv",
            "--json",
            "1",
        ])
        .unwrap();
        assert!(cli.plain);
        assert!(cli.no_sound);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["tonecalc", "-q", "-v", "tui"]).is_err());
    }

    #[test]
    fn test_log_format() {
        let cli = Cli::try_parse_from(["tonecalc", "--log-format", "json", "tui"]).unwrap();
        assert_eq!(cli.log_format, Some(LogFormatArg::Json));
        assert_eq!(LogFormat::from(LogFormatArg::Json), LogFormat::Json);
    }

    #[test]
    fn test_format_plain_is_global() {
        let cli = Cli::try_parse_from(["tonecalc", "format", "--plain", "1000"]).unwrap();
        assert!(cli.plain);
    }

    #[test]
    fn test_format_negative_value() {
        let cli = Cli::try_parse_from(["tonecalc", "format", "-1234.5"]).unwrap();
        let Some(Commands::Format(args)) = cli.command else {
            panic!("expected format");
        };
        assert_eq!(args.value, "-1234.5");
        assert!(!cli.plain);
    }
}
