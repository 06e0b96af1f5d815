//! Display renderer
//!
//! [`render`] turns a [`CalculatorState`] into the two display lines. Hosts
//! that own real display regions implement [`DisplayHost`] and receive the
//! lines through [`DisplayView::paint`]; nothing is ever read back.

use serde::{Deserialize, Serialize};

use crate::core::{format_number, CalculatorState, NumberFormat, EXPONENTIAL_THRESHOLD};

/// One of the two display regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayRegion {
    /// Expression / input line
    Expression,
    /// Result line
    Result,
}

impl DisplayRegion {
    /// Both regions in paint order
    pub const ALL: [Self; 2] = [Self::Expression, Self::Result];

    /// Stable element id of the region
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Expression => "display-input",
            Self::Result => "display-result",
        }
    }
}

/// Something that owns the two display regions
pub trait DisplayHost {
    /// Replaces the text of a region
    fn set_region_text(&mut self, region: DisplayRegion, text: &str);
}

impl<H: DisplayHost + ?Sized> DisplayHost for &mut H {
    fn set_region_text(&mut self, region: DisplayRegion, text: &str) {
        (**self).set_region_text(region, text);
    }
}

/// The two rendered display lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    /// Expression / input line
    pub expression: String,
    /// Result line
    pub result: String,
}

impl DisplayView {
    /// Text for a region
    #[must_use]
    pub fn text(&self, region: DisplayRegion) -> &str {
        match region {
            DisplayRegion::Expression => &self.expression,
            DisplayRegion::Result => &self.result,
        }
    }

    /// Pushes both lines into a host
    pub fn paint<H: DisplayHost + ?Sized>(&self, host: &mut H) {
        for region in DisplayRegion::ALL {
            host.set_region_text(region, self.text(region));
        }
    }
}

/// Renders the display lines for a state
///
/// With an operator pending the expression line reads
/// `"<first> <op> <input>"`, where the input is left blank until the next
/// operand is typed. Otherwise it is the input alone.
#[must_use]
pub fn render(state: &CalculatorState) -> DisplayView {
    let expression = match state.operator {
        Some(op) => {
            let first = state.first_operand.map(operand_text).unwrap_or_default();
            let tail = if state.should_reset_input {
                ""
            } else {
                state.input.as_str()
            };
            format!("{first} {op} {tail}")
        }
        None => state.input.clone(),
    };

    DisplayView {
        expression,
        result: state.result.clone(),
    }
}

/// Left operand as shown on the expression line
///
/// Large and non-finite values follow the result line's notation.
fn operand_text(value: f64) -> String {
    if !value.is_finite() || value.abs() >= EXPONENTIAL_THRESHOLD {
        format_number(value, NumberFormat::Plain)
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
