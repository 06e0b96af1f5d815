//! Browser bindings
//!
//! [`BrowserCalculator`] is the JavaScript entry point. It paints into the
//! page's `#display-input` / `#display-result` elements and plays tones
//! through Web Audio.

use wasm_bindgen::prelude::*;
use web_sys::{console, AudioContext, Document, OscillatorType};

use crate::audio::ToneSink;
use crate::config::CalculatorConfig;
use crate::core::NumberFormat;
use crate::render::{DisplayHost, DisplayRegion, DisplayView};
use crate::widget::CalculatorWidget;

const START_GAIN: f32 = 0.3;
const END_GAIN: f32 = 0.01;

/// Display host over the page document
#[derive(Debug)]
pub struct WebDisplay {
    document: Option<Document>,
}

impl WebDisplay {
    /// Binds to the current window's document, if there is one
    #[must_use]
    pub fn from_window() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }
}

impl DisplayHost for WebDisplay {
    fn set_region_text(&mut self, region: DisplayRegion, text: &str) {
        if let Some(elem) = self
            .document
            .as_ref()
            .and_then(|doc| doc.get_element_by_id(region.element_id()))
        {
            elem.set_text_content(Some(text));
        }
    }
}

/// Tone sink over a lazily created `AudioContext`
#[derive(Debug, Default)]
pub struct WebAudioTone {
    context: Option<AudioContext>,
}

impl WebAudioTone {
    /// Creates the sink; the audio context is opened on the first tone
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Option<&AudioContext> {
        if self.context.is_none() {
            self.context = AudioContext::new().ok();
        }
        self.context.as_ref()
    }

    fn try_play(&mut self, frequency_hz: f64, duration_secs: f64) -> Result<(), JsValue> {
        let Some(ctx) = self.context() else {
            return Ok(());
        };
        let now = ctx.current_time();
        let oscillator = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        oscillator.set_type(OscillatorType::Sine);
        oscillator
            .frequency()
            .set_value_at_time(frequency_hz as f32, now)?;
        gain.gain().set_value_at_time(START_GAIN, now)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(END_GAIN, now + duration_secs)?;

        oscillator.start_with_when(now)?;
        oscillator.stop_with_when(now + duration_secs)?;
        Ok(())
    }
}

impl ToneSink for WebAudioTone {
    fn play_tone(&mut self, frequency_hz: f64, duration_secs: f64) {
        if let Err(err) = self.try_play(frequency_hz, duration_secs) {
            console::warn_2(&"tone failed".into(), &err);
        }
    }
}

/// Calculator bound to the page
#[wasm_bindgen]
#[derive(Debug)]
pub struct BrowserCalculator {
    widget: CalculatorWidget<WebDisplay, WebAudioTone>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator painting into the current document
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with plain formatting and/or no sound
    #[wasm_bindgen(js_name = withOptions)]
    #[must_use]
    pub fn with_options(plain: bool, sound: bool) -> Self {
        let format = if plain {
            NumberFormat::Plain
        } else {
            NumberFormat::Grouped
        };
        Self::with_config(
            CalculatorConfig::new()
                .with_number_format(format)
                .with_sound(sound),
        )
    }

    /// Handles a click on a button carrying `data-value`
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, value: &str) -> bool {
        self.widget.handle_button(value)
    }

    /// Handles a keydown by key name
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.widget.handle_key(key)
    }

    /// Expression line
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn expression(&self) -> String {
        self.view().expression
    }

    /// Result line
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn result(&self) -> String {
        self.view().result
    }
}

impl BrowserCalculator {
    fn with_config(config: CalculatorConfig) -> Self {
        Self {
            widget: CalculatorWidget::with_config(
                WebDisplay::from_window(),
                WebAudioTone::new(),
                config,
            ),
        }
    }

    fn view(&self) -> DisplayView {
        self.widget.view()
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"tonecalc initialized".into());
}
