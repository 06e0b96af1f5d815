//! Input-handling state machine
//!
//! One handler per user action. Handlers never fail: division by zero puts
//! [`ERROR_MARKER`] on the result line, after which everything except
//! [`Calculator::clear`] is ignored until the state is cleared.

use tracing::{debug, trace};

use crate::core::format::decimal_text;
use crate::core::state::try_parse_operand;
use crate::core::{format_number, CalculatorState, NumberFormat, Operator, Token, ERROR_MARKER};

/// Calculator state machine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    format: NumberFormat,
    evaluations: u64,
}

impl Calculator {
    /// Creates a calculator in the default state with grouped formatting
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with the given result format
    #[must_use]
    pub fn with_format(format: NumberFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the result format in use
    #[must_use]
    pub const fn format(&self) -> NumberFormat {
        self.format
    }

    /// Number of evaluations performed since creation
    #[must_use]
    pub const fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Dispatches a token to its handler
    pub fn apply(&mut self, token: Token) {
        match token {
            Token::Digit(d) => self.input_digit(d),
            Token::Decimal => self.input_decimal(),
            Token::Operator(op) => self.input_operator(op),
            Token::Equals => self.input_equals(),
            Token::Clear => self.clear(),
            Token::Backspace => self.backspace(),
            Token::Percent => self.percent(),
        }
    }

    /// Types a digit; values above 9 are ignored
    pub fn input_digit(&mut self, digit: u8) {
        if self.is_locked() {
            return;
        }
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.state.should_reset_input {
            self.state.input = ch.to_string();
            self.state.should_reset_input = false;
        } else if self.state.input == "0" {
            self.state.input = ch.to_string();
        } else {
            self.state.input.push(ch);
        }
    }

    /// Types a decimal point
    pub fn input_decimal(&mut self) {
        if self.is_locked() {
            return;
        }

        if self.state.should_reset_input {
            self.state.input = "0.".to_string();
            self.state.should_reset_input = false;
        } else if !self.state.input.contains('.') {
            self.state.input.push('.');
        }
    }

    /// Selects a binary operator, evaluating any pending operation first
    pub fn input_operator(&mut self, op: Operator) {
        if self.is_locked() {
            return;
        }

        if self.state.first_operand.is_none() {
            self.state.first_operand = Some(self.state.input_value());
        } else if !self.state.should_reset_input {
            self.state.second_operand = Some(self.state.input_value());
            if let Some(value) = self.evaluate() {
                self.state.first_operand = Some(value);
            }
        }

        self.state.operator = Some(op);
        self.state.should_reset_input = true;
    }

    /// Evaluates the pending operation
    ///
    /// Does nothing without a first operand or when no digit was typed since
    /// the last operator or `=`.
    pub fn input_equals(&mut self) {
        if self.is_locked() {
            return;
        }
        if self.state.first_operand.is_none() || self.state.should_reset_input {
            return;
        }

        self.state.second_operand = Some(self.state.input_value());
        if let Some(value) = self.evaluate() {
            self.state.first_operand = Some(value);
        }
        self.state.operator = None;
        self.state.should_reset_input = true;
    }

    /// Resets everything to the initial state
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    /// Erases the last typed character
    pub fn backspace(&mut self) {
        if self.is_locked() || self.state.should_reset_input {
            return;
        }

        self.state.input.pop();
        if self.state.input.is_empty() {
            self.state.input = "0".to_string();
        }
    }

    /// Divides the input by 100
    ///
    /// An input too large to read as a finite number is left as typed.
    pub fn percent(&mut self) {
        if self.is_locked() {
            return;
        }

        let Some(value) = try_parse_operand(&self.state.input).map(|value| value / 100.0) else {
            trace!(input = %self.state.input, "percent skipped for out-of-range input");
            return;
        };
        self.state.input = decimal_text(value);
    }

    /// Applies the pending operator to both operands
    ///
    /// Returns the raw value on success. The right operand is consumed.
    fn evaluate(&mut self) -> Option<f64> {
        let second = self.state.second_operand.take()?;
        let (Some(first), Some(op)) = (self.state.first_operand, self.state.operator) else {
            return None;
        };

        self.evaluations += 1;
        match op.apply(first, second) {
            Ok(value) => {
                self.state.result = format_number(value, self.format);
                Some(value)
            }
            Err(err) => {
                debug!(%err, first, second, "evaluation failed");
                self.state.result = ERROR_MARKER.to_string();
                None
            }
        }
    }

    fn is_locked(&self) -> bool {
        let locked = self.state.is_error();
        if locked {
            trace!("input ignored while error marker is shown");
        }
        locked
    }
}
