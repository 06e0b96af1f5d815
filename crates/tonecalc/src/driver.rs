//! Platform-independent calculator driver
//!
//! Behaviour checks are written once against [`CalculatorDriver`] and run
//! against every front-end: the terminal app through [`TuiDriver`] and the
//! DOM through [`crate::dom::WasmDriver`].

use crate::core::{Token, ERROR_MARKER};

/// Interface shared by the terminal and DOM drivers
///
/// # Example
///
/// ```rust
/// use tonecalc::driver::CalculatorDriver;
/// use tonecalc::dom::WasmDriver;
///
/// let mut driver = WasmDriver::new();
/// driver.enter("12 + 30 =");
/// assert_eq!(driver.result(), "42");
/// ```
pub trait CalculatorDriver {
    /// Presses the button producing `token`
    fn press(&mut self, token: Token);

    /// Sends a keyboard key; returns false if it is not mapped
    fn key(&mut self, key: &str) -> bool;

    /// Expression line as displayed
    fn expression(&self) -> String;

    /// Result line as displayed
    fn result(&self) -> String;

    /// Number of evaluations performed so far
    fn evaluations(&self) -> u64;

    /// Presses Clear
    fn clear(&mut self) {
        self.press(Token::Clear);
    }

    /// Presses a whitespace-separated sequence of button values
    ///
    /// Words that are not themselves button values are pressed one character
    /// at a time, so `"12.5 * 4 ="` works. Unknown characters are skipped.
    fn enter(&mut self, sequence: &str) {
        for word in sequence.split_whitespace() {
            if let Some(token) = Token::from_button(word) {
                self.press(token);
                continue;
            }
            for token in word.chars().filter_map(Token::from_char) {
                self.press(token);
            }
        }
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Token;
    use crate::tui::{CalculatorApp, InputHandler, KeyAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new terminal driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// The underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Mutable access to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: Token) {
            self.app.press(token);
        }

        fn key(&mut self, key: &str) -> bool {
            let code = match key {
                "Enter" => KeyCode::Enter,
                "Escape" => KeyCode::Esc,
                "Backspace" => KeyCode::Backspace,
                _ => {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => KeyCode::Char(ch),
                        _ => return false,
                    }
                }
            };
            match InputHandler::new().handle_key(KeyEvent::new(code, KeyModifiers::NONE)) {
                KeyAction::Press(token) => {
                    self.app.press(token);
                    true
                }
                KeyAction::Quit | KeyAction::None => false,
            }
        }

        fn expression(&self) -> String {
            self.app.view().expression
        }

        fn result(&self) -> String {
            self.app.view().result
        }

        fn evaluations(&self) -> u64 {
            self.app.calculator().evaluations()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====

/// Each operator on two operands
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("3 + 4 =");
    assert_eq!(driver.result(), "7");
    driver.clear();

    driver.enter("10 - 4 =");
    assert_eq!(driver.result(), "6");
    driver.clear();

    driver.enter("6 * 7 =");
    assert_eq!(driver.result(), "42");
    driver.clear();

    driver.enter("20 / 8 =");
    assert_eq!(driver.result(), "2.5");
    driver.clear();
}

/// Operators evaluate left to right as they are pressed
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("2 + 3 + 4 =");
    assert_eq!(driver.result(), "9");
    driver.clear();

    driver.enter("2 + 3 *");
    assert_eq!(driver.result(), "5");
    driver.enter("4 =");
    assert_eq!(driver.result(), "20");
    driver.clear();

    driver.enter("1000 * 1000 =");
    assert_eq!(driver.result(), "1,000,000");
    driver.enter("+ 1 =");
    assert_eq!(driver.result(), "1,000,001");
    driver.clear();
}

/// Division by zero shows the error marker until Clear
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("6 / 0 =");
    assert_eq!(driver.result(), ERROR_MARKER);

    driver.enter("5 + 5 =");
    assert_eq!(driver.result(), ERROR_MARKER);

    driver.clear();
    assert_eq!(driver.result(), "0");
    assert_eq!(driver.expression(), "0");
}

/// Backspace and decimal point editing of the input
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("1 2 3");
    driver.press(Token::Backspace);
    assert_eq!(driver.expression(), "12");
    driver.press(Token::Backspace);
    driver.press(Token::Backspace);
    assert_eq!(driver.expression(), "0");

    driver.enter(". . 5");
    assert_eq!(driver.expression(), "0.5");
    driver.clear();
}

/// Percent divides the input by 100
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("5 0 %");
    assert_eq!(driver.expression(), "0.5");
    driver.press(Token::Percent);
    assert_eq!(driver.expression(), "0.005");
    driver.clear();
}

/// The expression line tracks the pending operation
pub fn verify_expression_line<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter("1 2 +");
    assert_eq!(driver.expression(), "12 + ");
    driver.enter("7");
    assert_eq!(driver.expression(), "12 + 7");
    driver.enter("/");
    assert_eq!(driver.expression(), "19 / ");
    assert_eq!(driver.result(), "19");
    driver.clear();
}

/// A second `=` does not evaluate again
pub fn verify_double_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let before = driver.evaluations();
    driver.enter("3 + 4 = =");
    assert_eq!(driver.evaluations(), before + 1);
    assert_eq!(driver.result(), "7");
    driver.clear();
}

/// Runs every shared check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_editing(driver);
    verify_percent(driver);
    verify_expression_line(driver);
    verify_double_equals(driver);
}
