//! DOM front-end
//!
//! The mock DOM and its driver are always compiled so the page behaviour can
//! be tested natively; the real browser bindings need the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod driver;
mod mock;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, WebAudioTone, WebDisplay};
pub use driver::WasmDriver;
pub use mock::{
    keypad_element, DomElement, DomEvent, MockDom, DATA_VALUE, EVENT_HISTORY_LIMIT,
};
