//! Calculator state record

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Result line text after a division by zero
pub const ERROR_MARKER: &str = "Error";

/// Everything the calculator remembers between key presses
///
/// Owned by a single [`crate::core::Calculator`] and replaced wholesale on
/// clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed; a decimal literal, never empty
    pub input: String,
    /// Formatted last result, or [`ERROR_MARKER`]
    pub result: String,
    /// Pending binary operator
    pub operator: Option<Operator>,
    /// Left operand of the pending operation
    pub first_operand: Option<f64>,
    /// Right operand, only set while evaluating
    pub second_operand: Option<f64>,
    /// Next digit starts a new operand instead of extending `input`
    pub should_reset_input: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            input: "0".to_string(),
            result: "0".to_string(),
            operator: None,
            first_operand: None,
            second_operand: None,
            should_reset_input: false,
        }
    }
}

impl CalculatorState {
    /// Creates the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the result line shows [`ERROR_MARKER`]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result == ERROR_MARKER
    }

    /// Returns true if an operator is waiting for its right operand
    #[must_use]
    pub const fn has_pending_operator(&self) -> bool {
        self.operator.is_some()
    }

    /// Numeric value of the input buffer
    ///
    /// Incomplete literals such as `"12."` read as their integer part.
    #[must_use]
    pub fn input_value(&self) -> f64 {
        parse_operand(&self.input)
    }
}

/// Parses an input buffer as a number, `0` when unparseable or too large
/// for an `f64`
pub(crate) fn parse_operand(text: &str) -> f64 {
    try_parse_operand(text).unwrap_or(0.0)
}

/// Parses an input buffer as a finite number
pub(crate) fn try_parse_operand(text: &str) -> Option<f64> {
    text.trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CalculatorState::new();
        assert_eq!(state.input, "0");
        assert_eq!(state.result, "0");
        assert_eq!(state.operator, None);
        assert_eq!(state.first_operand, None);
        assert_eq!(state.second_operand, None);
        assert!(!state.should_reset_input);
    }

    #[test]
    fn test_is_error() {
        let mut state = CalculatorState::new();
        assert!(!state.is_error());
        state.result = ERROR_MARKER.to_string();
        assert!(state.is_error());
    }

    #[test]
    fn test_has_pending_operator() {
        let mut state = CalculatorState::new();
        assert!(!state.has_pending_operator());
        state.operator = Some(Operator::Add);
        assert!(state.has_pending_operator());
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("0"), 0.0);
        assert_eq!(parse_operand("12"), 12.0);
        assert_eq!(parse_operand("12."), 12.0);
        assert_eq!(parse_operand("0."), 0.0);
        assert_eq!(parse_operand("0.25"), 0.25);
        assert_eq!(parse_operand(""), 0.0);
    }

    #[test]
    fn test_parse_operand_overflow_reads_zero() {
        let digits = "9".repeat(400);
        assert_eq!(try_parse_operand(&digits), None);
        assert_eq!(parse_operand(&digits), 0.0);
        assert_eq!(parse_operand(&format!("{digits}.")), 0.0);
        assert_eq!(try_parse_operand("1e5"), Some(100_000.0));
    }

    #[test]
    fn test_input_value() {
        let state = CalculatorState {
            input: "3.5".to_string(),
            ..CalculatorState::default()
        };
        assert_eq!(state.input_value(), 3.5);
    }

    #[test]
    fn test_state_serializes() {
        let state = CalculatorState::new();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["input"], "0");
        assert_eq!(json["operator"], serde_json::Value::Null);
    }
}
