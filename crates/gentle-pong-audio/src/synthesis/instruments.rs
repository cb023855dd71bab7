//! Instrument presets for the oscillator bank.
//!
//! Each instrument is a fixed partial table plus envelope character. The
//! tables are design constants; callers only choose pitch, length and volume.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::voice::{Partial, Voice};
use crate::envelope::Attack;
use crate::error::{AudioError, AudioResult};

/// Default linear fade length of the sine instrument, in milliseconds.
pub const SINE_FADE_MS: f64 = 60.0;

/// Glockenspiel partials: near-harmonic to strongly inharmonic, fast decays.
const GLOCKENSPIEL: [Partial; 4] = [
    Partial::new(1.0, 1.0, 4.0),   // fundamental
    Partial::new(2.76, 0.45, 6.0), // metallic
    Partial::new(5.4, 0.20, 10.0), // shimmer
    Partial::new(8.93, 0.08, 16.0),
];

/// Marimba partials: fewer, tamer inharmonics.
const MARIMBA: [Partial; 3] = [
    Partial::new(1.0, 1.0, 3.5),
    Partial::new(4.0, 0.30, 7.0),
    Partial::new(9.2, 0.08, 14.0),
];

/// Ambient pad: two voices +/-1.5 Hz around the fundamental and a quiet octave.
const AMBIENT: [Partial; 3] = [
    Partial::new(1.0, 0.5, 0.5).detuned(-1.5),
    Partial::new(1.0, 0.5, 0.5).detuned(1.5),
    Partial::new(2.0, 0.12, 0.5),
];

/// Singing bowl partials; the third is slightly sharp.
const BOWL: [Partial; 4] = [
    Partial::new(1.0, 1.0, 1.2),
    Partial::new(2.0, 0.35, 1.8),
    Partial::new(3.01, 0.15, 2.5),
    Partial::new(4.98, 0.06, 3.5),
];

/// The closed set of instruments in the oscillator bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// Bright, short, metallic.
    Glockenspiel,
    /// Pure tone with linear fades.
    Sine,
    /// Warm, woody, rounder than the glockenspiel.
    Marimba,
    /// Long, soft detuned pad.
    Ambient,
    /// Long resonant ring with audible beating.
    Bowl,
}

impl Instrument {
    /// All instruments, in bank order.
    pub const ALL: [Instrument; 5] = [
        Instrument::Glockenspiel,
        Instrument::Sine,
        Instrument::Marimba,
        Instrument::Ambient,
        Instrument::Bowl,
    ];

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Glockenspiel => "glockenspiel",
            Instrument::Sine => "sine",
            Instrument::Marimba => "marimba",
            Instrument::Ambient => "ambient",
            Instrument::Bowl => "bowl",
        }
    }

    /// Builds the voice description for this instrument.
    pub fn voice(&self) -> Voice {
        match self {
            Instrument::Glockenspiel => {
                Voice::new(GLOCKENSPIEL.to_vec(), Attack::Linear { seconds: 0.002 })
            }
            Instrument::Sine => sine_voice(SINE_FADE_MS),
            Instrument::Marimba => Voice::new(MARIMBA.to_vec(), Attack::Linear { seconds: 0.004 }),
            Instrument::Ambient => Voice::new(AMBIENT.to_vec(), Attack::Cosine { seconds: 0.12 }),
            Instrument::Bowl => {
                Voice::new(BOWL.to_vec(), Attack::Cosine { seconds: 0.08 }).with_tremolo(4.1, 0.06)
            }
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Instrument {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instrument::ALL
            .iter()
            .copied()
            .find(|instrument| instrument.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AudioError::UnknownInstrument {
                name: s.to_string(),
            })
    }
}

/// Sine voice with a linear fade-in and fade-out of `fade_ms` each.
pub fn sine_voice(fade_ms: f64) -> Voice {
    let seconds = fade_ms.max(0.0) / 1000.0;
    Voice::new(vec![Partial::new(1.0, 1.0, 0.0)], Attack::Linear { seconds }).with_fade_out(seconds)
}

/// Synthesizes one note on the given instrument.
///
/// # Arguments
/// * `instrument` - Instrument from the bank
/// * `frequency` - Fundamental frequency in Hz
/// * `duration_ms` - Note length in milliseconds
/// * `volume` - Output gain
/// * `sample_rate` - Audio sample rate in Hz
pub fn synthesize(
    instrument: Instrument,
    frequency: f64,
    duration_ms: f64,
    volume: f64,
    sample_rate: u32,
) -> AudioResult<Vec<f64>> {
    instrument
        .voice()
        .render(frequency, duration_ms, volume, sample_rate)
}

/// Sine tone with a custom fade length.
pub fn sine_tone(
    frequency: f64,
    duration_ms: f64,
    volume: f64,
    fade_ms: f64,
    sample_rate: u32,
) -> AudioResult<Vec<f64>> {
    if !fade_ms.is_finite() || fade_ms < 0.0 {
        return Err(AudioError::invalid_param(
            "fade_ms",
            format!("must be a finite value >= 0, got {}", fade_ms),
        ));
    }
    sine_voice(fade_ms).render(frequency, duration_ms, volume, sample_rate)
}
