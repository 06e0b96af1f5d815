//! Terminal front-end

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, TextDisplay};
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{render, CalculatorUI, UiLayout, HELP_SHORTCUTS, TITLE};
