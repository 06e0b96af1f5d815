//! Input tokens
//!
//! Buttons and keyboard keys both reduce to a [`Token`]. Anything that does
//! not map to one is ignored by the widget.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operator};

/// A single user action understood by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset all state
    Clear,
    /// Erase the last input character
    Backspace,
    /// Divide the input by 100
    Percent,
}

impl Token {
    /// Maps a button token (`data-value`) to a token
    ///
    /// Accepted values: `0`-`9`, `.`, `+`, `-`, `*`, `/`, `=`, `C`,
    /// `Backspace`, `%`.
    #[must_use]
    pub fn from_button(value: &str) -> Option<Self> {
        match value {
            "=" => Some(Self::Equals),
            "C" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => Self::from_symbol(value),
        }
    }

    /// Maps a keyboard key name to a token
    ///
    /// Same set as the buttons, except `Enter` also evaluates and `Escape`
    /// clears.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => Self::from_symbol(key),
        }
    }

    /// Single-character tokens shared by buttons and keys
    fn from_symbol(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::from_char(ch)
    }

    /// Maps a typed character to a token
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '%' => Some(Self::Percent),
            '=' => Some(Self::Equals),
            _ => Operator::from_symbol(ch).map(Self::Operator),
        }
    }

    /// The button token this token is produced by
    #[must_use]
    pub fn button_value(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns the keypad label for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Backspace => "⌫".to_string(),
            _ => self.button_value(),
        }
    }

    /// Returns true for digit tokens
    #[must_use]
    pub const fn is_digit(&self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_button(s).ok_or_else(|| CalcError::unknown_token(s))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.button_value())
    }
}
