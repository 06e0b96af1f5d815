//! Terminal application state

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyAction};
use super::keypad::hit_test;
use crate::audio::{SilentTone, ToneSink};
use crate::config::CalculatorConfig;
use crate::core::{Calculator, CalculatorState, Token};
use crate::keypad::Keypad;
use crate::render::{DisplayHost, DisplayRegion, DisplayView};
use crate::widget::CalculatorWidget;

/// Display host holding the two lines as plain text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDisplay {
    /// Expression line
    pub expression: String,
    /// Result line
    pub result: String,
}

impl DisplayHost for TextDisplay {
    fn set_region_text(&mut self, region: DisplayRegion, text: &str) {
        let line = match region {
            DisplayRegion::Expression => &mut self.expression,
            DisplayRegion::Result => &mut self.result,
        };
        line.clear();
        line.push_str(text);
    }
}

/// Calculator application state
pub struct CalculatorApp {
    widget: CalculatorWidget<TextDisplay, Box<dyn ToneSink>>,
    keypad: Keypad,
    input: InputHandler,
    last_pressed: Option<Token>,
    should_quit: bool,
}

impl std::fmt::Debug for CalculatorApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculatorApp")
            .field("display", self.widget.host())
            .field("config", self.widget.config())
            .field("last_pressed", &self.last_pressed)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a silent app with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default(), Box::new(SilentTone))
    }

    /// Creates an app with a configuration and tone sink
    #[must_use]
    pub fn with_config(config: CalculatorConfig, tone: Box<dyn ToneSink>) -> Self {
        Self {
            widget: CalculatorWidget::with_config(TextDisplay::default(), tone, config),
            keypad: Keypad::new(),
            input: InputHandler::new(),
            last_pressed: None,
            should_quit: false,
        }
    }

    /// Presses a button and highlights it on the keypad
    pub fn press(&mut self, token: Token) {
        self.widget.press(token);
        self.last_pressed = Some(token);
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, event: KeyEvent) {
        match self.input.handle_key(event) {
            KeyAction::Press(token) => self.press(token),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at `(x, y)` given where the keypad was drawn
    ///
    /// Returns the pressed token, if the click landed on a button.
    pub fn handle_click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Token> {
        let token = hit_test(&self.keypad, keypad_area, x, y)?;
        self.press(token);
        Some(token)
    }

    /// The painted display lines
    #[must_use]
    pub fn display(&self) -> &TextDisplay {
        self.widget.host()
    }

    /// Display lines as last painted
    #[must_use]
    pub fn view(&self) -> DisplayView {
        let display = self.widget.host();
        DisplayView {
            expression: display.expression.clone(),
            result: display.result.clone(),
        }
    }

    /// The underlying state machine
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        self.widget.calculator()
    }

    /// Current calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.widget.state()
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        self.widget.config()
    }

    /// The keypad layout
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Most recently pressed button
    #[must_use]
    pub const fn last_pressed(&self) -> Option<Token> {
        self.last_pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::ToneLog;
    use crate::core::NumberFormat;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Shares the recorded tones with the test after the app takes the sink
    #[derive(Clone, Default)]
    struct SharedLog(Rc<RefCell<ToneLog>>);

    impl ToneSink for SharedLog {
        fn play_tone(&mut self, frequency_hz: f64, duration_secs: f64) {
            self.0.borrow_mut().play_tone(frequency_hz, duration_secs);
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display().expression, "0");
        assert_eq!(app.display().result, "0");
        assert_eq!(app.last_pressed(), None);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_text_display_overwrites() {
        let mut display = TextDisplay::default();
        display.set_region_text(DisplayRegion::Expression, "123");
        display.set_region_text(DisplayRegion::Expression, "4");
        display.set_region_text(DisplayRegion::Result, "7");
        assert_eq!(display.expression, "4");
        assert_eq!(display.result, "7");
    }

    #[test]
    fn test_press_updates_display_and_highlight() {
        let mut app = CalculatorApp::new();
        app.press(Token::Digit(4));
        app.press(Token::Operator(crate::core::Operator::Multiply));
        assert_eq!(app.display().expression, "4 * ");
        assert_eq!(
            app.last_pressed(),
            Some(Token::Operator(crate::core::Operator::Multiply))
        );
    }

    #[test]
    fn test_handle_key_sequence() {
        let mut app = CalculatorApp::new();
        for code in [
            KeyCode::Char('9'),
            KeyCode::Char('-'),
            KeyCode::Char('4'),
            KeyCode::Enter,
        ] {
            app.handle_key(key(code));
        }
        assert_eq!(app.view().result, "5");
        assert_eq!(app.last_pressed(), Some(Token::Equals));
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = CalculatorApp::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ignored_key_keeps_highlight() {
        let mut app = CalculatorApp::new();
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.last_pressed(), Some(Token::Digit(3)));
        assert_eq!(app.display().expression, "3");
    }

    #[test]
    fn test_handle_click() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        assert_eq!(app.handle_click(area, 6, 3), Some(Token::Digit(8)));
        assert_eq!(app.display().expression, "8");
        assert_eq!(app.handle_click(area, 0, 0), None);
        assert_eq!(app.display().expression, "8");
    }

    #[test]
    fn test_tones_reach_sink() {
        let log = SharedLog::default();
        let mut app = CalculatorApp::with_config(CalculatorConfig::default(), Box::new(log.clone()));
        app.press(Token::Digit(1));
        app.press(Token::Clear);
        let tones = log.0.borrow();
        assert_eq!(tones.len(), 2);
        assert_eq!(tones.tones()[0].frequency_hz, 293.66);
        assert_eq!(tones.tones()[1].frequency_hz, 800.0);
    }

    #[test]
    fn test_config_is_applied() {
        let config = CalculatorConfig::new()
            .with_number_format(NumberFormat::Plain)
            .with_sound(false);
        let mut app = CalculatorApp::with_config(config, Box::new(SilentTone));
        for ch in "5000*3=".chars() {
            app.press(Token::from_char(ch).unwrap());
        }
        assert_eq!(app.display().result, "15000");
        assert_eq!(app.config().number_format, NumberFormat::Plain);
    }

    #[test]
    fn test_debug_output() {
        let app = CalculatorApp::new();
        let debug = format!("{app:?}");
        assert!(debug.contains("CalculatorApp"));
        assert!(debug.contains("should_quit"));
    }

    #[test]
    fn test_state_access() {
        let mut app = CalculatorApp::new();
        app.press(Token::Digit(2));
        assert_eq!(app.state().input, "2");
        assert_eq!(app.calculator().evaluations(), 0);
        assert_eq!(app.keypad().button_count(), 19);
    }
}
