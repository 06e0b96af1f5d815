//! Calculator widget
//!
//! [`CalculatorWidget`] is the event handler every front-end shares: it maps
//! a button value or key name to a [`Token`], plays its tone, runs the state
//! machine and repaints the display host.

use tracing::{debug, trace};

use crate::audio::{tone_for, ToneSink};
use crate::config::CalculatorConfig;
use crate::core::{Calculator, CalculatorState, Token};
use crate::render::{render, DisplayHost, DisplayView};

/// Calculator bound to a display host and a tone sink
#[derive(Debug)]
pub struct CalculatorWidget<H, T> {
    calculator: Calculator,
    config: CalculatorConfig,
    host: H,
    tone: T,
}

impl<H: DisplayHost, T: ToneSink> CalculatorWidget<H, T> {
    /// Creates a widget with the default configuration and paints it
    pub fn new(host: H, tone: T) -> Self {
        Self::with_config(host, tone, CalculatorConfig::default())
    }

    /// Creates a widget with the given configuration and paints it
    pub fn with_config(host: H, tone: T, config: CalculatorConfig) -> Self {
        let mut widget = Self {
            calculator: Calculator::with_format(config.number_format),
            config,
            host,
            tone,
        };
        widget.refresh();
        widget
    }

    /// Handles a button click by its `data-value`
    ///
    /// Returns false if the value is not a calculator button.
    pub fn handle_button(&mut self, value: &str) -> bool {
        match Token::from_button(value) {
            Some(token) => {
                self.press(token);
                true
            }
            None => {
                trace!(value, "ignoring unknown button");
                false
            }
        }
    }

    /// Handles a keyboard key by name
    ///
    /// Returns false if the key is not mapped.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Token::from_key(key) {
            Some(token) => {
                self.press(token);
                true
            }
            None => {
                trace!(key, "ignoring unmapped key");
                false
            }
        }
    }

    /// Plays the token's tone, applies it and repaints
    pub fn press(&mut self, token: Token) {
        if self.config.sound {
            self.tone.play(tone_for(token));
        }
        self.calculator.apply(token);
        self.refresh();
        debug!(
            %token,
            input = %self.calculator.state().input,
            result = %self.calculator.state().result,
            "token handled"
        );
    }

    /// Repaints the host from the current state
    pub fn refresh(&mut self) {
        render(self.calculator.state()).paint(&mut self.host);
    }

    /// Current display lines
    #[must_use]
    pub fn view(&self) -> DisplayView {
        render(self.calculator.state())
    }
}

impl<H, T> CalculatorWidget<H, T> {
    /// The underlying state machine
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Current calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The display host
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the display host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The tone sink
    #[must_use]
    pub const fn tone(&self) -> &T {
        &self.tone
    }

    /// Mutable access to the tone sink
    pub fn tone_mut(&mut self) -> &mut T {
        &mut self.tone
    }
}
