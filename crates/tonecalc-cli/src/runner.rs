//! Scripted commands: `run` and `format`

use std::io::Write;

use console::style;
use tonecalc::audio::SilentTone;
use tonecalc::config::CalculatorConfig;
use tonecalc::core::{format_number, NumberFormat, Token};
use tonecalc::render::DisplayView;
use tonecalc::tui::TextDisplay;
use tonecalc::widget::CalculatorWidget;
use tracing::{debug, info};

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Turns command-line words into tokens
///
/// Without `keys`, a word is a button value (`7`, `+`, `Backspace`, ...) or a
/// run of button characters (`12+30=`). With `keys`, each word is one
/// keyboard key name. Any unrecognised word is an error.
pub fn parse_tokens(words: &[String], keys: bool) -> CliResult<Vec<Token>> {
    let mut tokens = Vec::new();
    for word in words {
        if keys {
            let token = Token::from_key(word)
                .ok_or_else(|| CliError::invalid_argument(format!("unknown key `{word}`")))?;
            tokens.push(token);
            continue;
        }
        if let Some(token) = Token::from_button(word) {
            tokens.push(token);
            continue;
        }
        for ch in word.chars() {
            let token = Token::from_char(ch).ok_or_else(|| {
                CliError::invalid_argument(format!("unknown button `{ch}` in `{word}`"))
            })?;
            tokens.push(token);
        }
    }
    Ok(tokens)
}

/// Presses the tokens on a fresh calculator and returns what it displays
#[must_use]
pub fn run_tokens(config: CalculatorConfig, tokens: &[Token]) -> DisplayView {
    let mut widget = CalculatorWidget::with_config(TextDisplay::default(), SilentTone, config);
    for &token in tokens {
        widget.press(token);
    }
    info!(
        presses = tokens.len(),
        evaluations = widget.calculator().evaluations(),
        "run finished"
    );
    let display = widget.host();
    DisplayView {
        expression: display.expression.clone(),
        result: display.result.clone(),
    }
}

/// Writes a display to `out`
///
/// JSON prints `{"expression":..,"result":..}`; quiet prints only the result.
pub fn write_view(
    out: &mut impl Write,
    view: &DisplayView,
    json: bool,
    verbosity: Verbosity,
) -> CliResult<()> {
    if json {
        serde_json::to_writer(&mut *out, view)?;
        writeln!(out)?;
    } else if verbosity.is_quiet() {
        writeln!(out, "{}", view.result)?;
    } else {
        writeln!(out, "{}", style(&view.expression).dim())?;
        writeln!(out, "{}", style(&view.result).bold())?;
    }
    Ok(())
}

/// Formats a number argument
pub fn format_value(value: &str, format: NumberFormat) -> CliResult<String> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| CliError::invalid_argument(format!("`{value}` is not a number")))?;
    debug!(number, ?format, "formatting");
    Ok(format_number(number, format))
}
