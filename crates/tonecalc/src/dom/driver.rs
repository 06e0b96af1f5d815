//! DOM driver
//!
//! Drives a [`CalculatorWidget`] painted into a [`MockDom`] the way a page
//! would: clicks resolve the button's `data-value`, keydowns pass the key
//! name through.

use super::mock::{DomEvent, MockDom};
use crate::audio::ToneLog;
use crate::config::CalculatorConfig;
use crate::core::Token;
use crate::driver::CalculatorDriver;
use crate::keypad::button_id;
use crate::render::DisplayRegion;
use crate::widget::CalculatorWidget;

/// Driver wrapping a widget over the mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    widget: CalculatorWidget<MockDom, ToneLog>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over the calculator markup
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            widget: CalculatorWidget::with_config(MockDom::calculator(), ToneLog::new(), config),
        }
    }

    /// The DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.widget.host()
    }

    /// Tones played so far
    #[must_use]
    pub fn tones(&self) -> &ToneLog {
        self.widget.tone()
    }

    /// The widget being driven
    #[must_use]
    pub const fn widget(&self) -> &CalculatorWidget<MockDom, ToneLog> {
        &self.widget
    }

    /// Clicks an element by id
    ///
    /// Returns false if the element is not a calculator button.
    pub fn click_element(&mut self, element_id: &str) -> bool {
        let dom = self.widget.host_mut();
        dom.dispatch_event(DomEvent::click(element_id));
        let Some(value) = dom.button_value(element_id).map(str::to_string) else {
            return false;
        };
        self.widget.handle_button(&value)
    }

    /// Sends a keydown to the document
    pub fn key_down(&mut self, key: &str) -> bool {
        self.widget
            .host_mut()
            .dispatch_event(DomEvent::key_down(key));
        self.widget.handle_key(key)
    }

    fn region_text(&self, region: DisplayRegion) -> String {
        self.dom()
            .get_element_text(region.element_id())
            .unwrap_or_default()
            .to_string()
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, token: Token) {
        self.click_element(&button_id(token));
    }

    fn key(&mut self, key: &str) -> bool {
        self.key_down(key)
    }

    fn expression(&self) -> String {
        self.region_text(DisplayRegion::Expression)
    }

    fn result(&self) -> String {
        self.region_text(DisplayRegion::Result)
    }

    fn evaluations(&self) -> u64 {
        self.widget.calculator().evaluations()
    }
}
