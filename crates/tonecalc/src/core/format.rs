//! Number formatting for the result line
//!
//! Three regimes, checked in order:
//!
//! 1. `|v| >= 1e10`: exponential with two fractional digits (`1.23e+10`)
//! 2. fractional values: rounded to at most 10 decimals, trailing zeros dropped
//! 3. integers: plain integer text
//!
//! [`NumberFormat::Grouped`] additionally comma-groups the integer part of
//! regimes 2 and 3.

use serde::{Deserialize, Serialize};

/// Values at or above this magnitude are shown in exponential notation
pub const EXPONENTIAL_THRESHOLD: f64 = 1e10;

/// Maximum number of fractional digits shown
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Formatting variant for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// No separators: `1234567.5`
    Plain,
    /// Comma-grouped integer part: `1,234,567.5`
    #[default]
    Grouped,
}

impl NumberFormat {
    /// Returns true if the integer part is comma-grouped
    #[must_use]
    pub const fn is_grouped(self) -> bool {
        matches!(self, Self::Grouped)
    }
}

/// Formats a computed value for the result line
#[must_use]
pub fn format_number(value: f64, format: NumberFormat) -> String {
    if !value.is_finite() {
        return non_finite_text(value).to_string();
    }

    if value.abs() >= EXPONENTIAL_THRESHOLD {
        return to_exponential(value);
    }

    let text = if value.fract() == 0.0 {
        decimal_text(value)
    } else {
        let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
        decimal_text(fixed.parse().unwrap_or(value))
    };

    if format.is_grouped() {
        group_thousands(&text)
    } else {
        text
    }
}

/// Inserts `,` every three digits of the integer part
///
/// The sign and the fractional part are left alone. Text whose integer part
/// is not plain ASCII digits is returned unchanged.
#[must_use]
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Shortest round-trip decimal text, never exponential, no negative zero
pub(crate) fn decimal_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// `1.23e+10` style with an explicit exponent sign
fn to_exponential(value: f64) -> String {
    let raw = format!("{value:.2e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{}", exponent.abs())
        }
        None => raw,
    }
}

fn non_finite_text(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}
