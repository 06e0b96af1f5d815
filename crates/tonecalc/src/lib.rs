//! tonecalc - keypad calculator widget
//!
//! A four-function calculator driven one key press at a time. The
//! platform-independent [`core`] state machine is shared by a terminal
//! front-end ([`tui`]) and a browser front-end ([`dom`]), both built on
//! [`widget::CalculatorWidget`], which maps input to tokens, plays a tone
//! per key and repaints a two-line display.
//!
//! # Example
//!
//! ```rust
//! use tonecalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for value in ["1", "2", "+", "3", "0", "="] {
//!     calc.apply(Token::from_button(value).unwrap());
//! }
//! assert_eq!(calc.state().result, "42");
//!
//! let view = render(calc.state());
//! assert_eq!(view.expression, "30");
//! assert_eq!(format_number(1234567.0, NumberFormat::Grouped), "1,234,567");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod audio;
pub mod config;
pub mod core;
pub mod dom;
pub mod driver;
pub mod keypad;
pub mod render;
pub mod widget;

#[cfg(feature = "tui")]
pub mod tui;

pub use core::{CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::audio::{tone_for, SilentTone, Tone, ToneLog, ToneSink};
    pub use crate::config::CalculatorConfig;
    pub use crate::core::{
        format_number, CalcError, CalcResult, Calculator, CalculatorState, NumberFormat, Operator,
        Token, ERROR_MARKER,
    };
    pub use crate::dom::{DomElement, DomEvent, MockDom, WasmDriver};
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{Keypad, KeypadButtonDef};
    pub use crate::render::{render, DisplayHost, DisplayRegion, DisplayView};
    pub use crate::widget::CalculatorWidget;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
