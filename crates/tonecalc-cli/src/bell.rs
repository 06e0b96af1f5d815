//! Terminal bell tone sink
//!
//! A terminal cannot synthesise a pitch, so every tone becomes one BEL
//! character.

use std::io::{self, Stdout, Write};

use tonecalc::audio::ToneSink;
use tracing::warn;

const BEL: &[u8] = b"\x07";

/// Tone sink that rings the terminal bell
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    rung: usize,
}

impl TerminalBell<Stdout> {
    /// Bell on standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    /// Bell on the given writer
    pub const fn new(out: W) -> Self {
        Self { out, rung: 0 }
    }

    /// Number of bells rung
    #[must_use]
    pub const fn rung(&self) -> usize {
        self.rung
    }

    /// Consumes the bell, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ToneSink for TerminalBell<W> {
    fn play_tone(&mut self, frequency_hz: f64, duration_secs: f64) {
        match self.out.write_all(BEL).and_then(|()| self.out.flush()) {
            Ok(()) => self.rung += 1,
            Err(err) => warn!(frequency_hz, duration_secs, %err, "terminal bell failed"),
        }
    }
}
