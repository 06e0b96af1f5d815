//! Tone feedback
//!
//! Every accepted key press plays a short tone through an injected
//! [`ToneSink`]. Digits climb a scale from C4, everything else shares a
//! short click.

use serde::{Deserialize, Serialize};

use crate::core::Token;

/// Frequencies for digits 0-9, in Hz
pub const DIGIT_SCALE: [f64; 10] = [
    261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25, 587.33, 659.25,
];

/// How long a digit tone lasts, in seconds
pub const DIGIT_TONE_SECS: f64 = 0.3;

/// Tone for every non-digit button
pub const BUTTON_TONE: Tone = Tone {
    frequency_hz: 800.0,
    duration_secs: 0.1,
};

/// Number of most recent tones [`ToneLog`] remembers
pub const TONE_LOG_LIMIT: usize = 64;

/// A single tone request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Pitch in Hz
    pub frequency_hz: f64,
    /// Length in seconds
    pub duration_secs: f64,
}

/// Returns the tone played for a token
#[must_use]
pub fn tone_for(token: Token) -> Tone {
    match token {
        Token::Digit(d) => DIGIT_SCALE
            .get(usize::from(d))
            .map_or(BUTTON_TONE, |&frequency_hz| Tone {
                frequency_hz,
                duration_secs: DIGIT_TONE_SECS,
            }),
        _ => BUTTON_TONE,
    }
}

/// Plays tones
///
/// Implementations are fire-and-forget; failures are swallowed so that a
/// missing audio device never blocks input.
pub trait ToneSink {
    /// Plays a tone
    fn play_tone(&mut self, frequency_hz: f64, duration_secs: f64);

    /// Plays a [`Tone`]
    fn play(&mut self, tone: Tone) {
        self.play_tone(tone.frequency_hz, tone.duration_secs);
    }
}

impl<T: ToneSink + ?Sized> ToneSink for Box<T> {
    fn play_tone(&mut self, frequency_hz: f64, duration_secs: f64) {
        (**self).play_tone(frequency_hz, duration_secs);
    }
}

/// Tone sink that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentTone;

impl ToneSink for SilentTone {
    fn play_tone(&mut self, _frequency_hz: f64, _duration_secs: f64) {}
}

/// Tone sink that records the latest [`TONE_LOG_LIMIT`] requests
#[derive(Debug, Clone, Default)]
pub struct ToneLog {
    tones: Vec<Tone>,
}

impl ToneLog {
    /// Creates an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded tones, oldest first
    #[must_use]
    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Most recent tone
    #[must_use]
    pub fn last(&self) -> Option<Tone> {
        self.tones.last().copied()
    }

    /// Number of recorded tones
    #[must_use]
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// Returns true if nothing was played
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Forgets all recorded tones
    pub fn clear(&mut self) {
        self.tones.clear();
    }
}

impl ToneSink for ToneLog {
    fn play_tone(&mut self, frequency_hz: f64, duration_secs: f64) {
        if self.tones.len() == TONE_LOG_LIMIT {
            self.tones.remove(0);
        }
        self.tones.push(Tone {
            frequency_hz,
            duration_secs,
        });
    }
}
