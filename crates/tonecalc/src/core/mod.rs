//! Calculator core: input state machine and number formatting
//!
//! Everything in here is platform independent. Front-ends feed
//! [`Token`]s into a [`Calculator`] and paint whatever
//! [`crate::render::render`] makes of its [`CalculatorState`].

mod format;
mod machine;
mod operations;
mod state;
mod token;

pub use format::{format_number, group_thousands, NumberFormat, EXPONENTIAL_THRESHOLD};
pub use machine::Calculator;
pub use operations::Operator;
pub use state::{CalculatorState, ERROR_MARKER};
pub use token::Token;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// None of these escape the state machine handlers: division by zero becomes
/// [`ERROR_MARKER`] on the result line and unknown tokens are dropped by the
/// widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Input that is neither a digit, an operator nor a control key
    #[error("Unknown token: {token:?}")]
    UnknownToken {
        /// The rejected button value or key name
        token: String,
    },
}

impl CalcError {
    /// Creates an unknown token error
    #[must_use]
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::UnknownToken {
            token: token.into(),
        }
    }
}
