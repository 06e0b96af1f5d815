//! tonecalc: keypad calculator with tone feedback
//!
//! ## Usage
//!
//! ```bash
//! tonecalc                         # Interactive terminal calculator
//! tonecalc run 12 + 30 =           # Press buttons, print the display
//! tonecalc run --keys 9 Enter      # Same, with keyboard key names
//! tonecalc run --json '1000*3='    # Display as JSON
//! tonecalc format 1234567.5        # 1,234,567.5
//! ```

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tonecalc_cli::{
    logging, runner, terminal, Cli, CliConfig, CliResult, Commands, FormatArgs, LogTarget,
    RunArgs,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::resolve(&cli)?;
    let command = cli.command.unwrap_or(Commands::Tui);

    let interactive = matches!(command, Commands::Tui);
    logging::init(&config, &LogTarget::for_command(&config, interactive))?;
    tracing::debug!(?config, "configuration resolved");

    match command {
        Commands::Tui => terminal::run_tui(config.calculator),
        Commands::Run(args) => run_tokens(&config, &args),
        Commands::Format(args) => run_format(&config, &args),
    }
}

fn run_tokens(config: &CliConfig, args: &RunArgs) -> CliResult<()> {
    let tokens = runner::parse_tokens(&args.tokens, args.keys)?;
    let view = runner::run_tokens(config.calculator, &tokens);
    let mut stdout = io::stdout().lock();
    runner::write_view(&mut stdout, &view, args.json, config.verbosity)?;
    stdout.flush()?;
    Ok(())
}

fn run_format(config: &CliConfig, args: &FormatArgs) -> CliResult<()> {
    let text = runner::format_value(&args.value, config.calculator.number_format)?;
    println!("{text}");
    Ok(())
}
