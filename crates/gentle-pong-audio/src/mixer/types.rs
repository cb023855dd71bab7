//! Declarative description of how notes are combined.

use serde::{Deserialize, Serialize};

use super::mixer::{mix_chord, mix_sequence, mix_single};
use crate::error::AudioResult;
use crate::synthesis::Instrument;

/// How one or more notes become a single buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MixPattern {
    /// One note.
    Single {
        /// Frequency in Hz.
        frequency: f64,
        /// Note length in milliseconds.
        duration_ms: f64,
        /// Output gain.
        volume: f64,
    },
    /// Simultaneous notes sharing the volume.
    Chord {
        /// Frequencies in Hz.
        frequencies: Vec<f64>,
        /// Note length in milliseconds.
        duration_ms: f64,
        /// Total output gain, split across voices.
        volume: f64,
    },
    /// Overlapping notes at a fixed stride.
    Sequence {
        /// Frequencies in Hz, in playing order.
        notes: Vec<f64>,
        /// Extra spacing between note starts in milliseconds.
        gap_ms: f64,
        /// Note length in milliseconds.
        duration_ms: f64,
        /// Per-note output gain.
        volume: f64,
    },
}

impl MixPattern {
    /// Returns the pattern name.
    pub fn kind(&self) -> &'static str {
        match self {
            MixPattern::Single { .. } => "single",
            MixPattern::Chord { .. } => "chord",
            MixPattern::Sequence { .. } => "sequence",
        }
    }

    /// Renders the pattern on `instrument`.
    pub fn render(&self, instrument: Instrument, sample_rate: u32) -> AudioResult<Vec<f64>> {
        match self {
            MixPattern::Single {
                frequency,
                duration_ms,
                volume,
            } => mix_single(instrument, *frequency, *duration_ms, *volume, sample_rate),
            MixPattern::Chord {
                frequencies,
                duration_ms,
                volume,
            } => mix_chord(instrument, frequencies, *duration_ms, *volume, sample_rate),
            MixPattern::Sequence {
                notes,
                gap_ms,
                duration_ms,
                volume,
            } => mix_sequence(
                instrument,
                notes,
                *gap_ms,
                *duration_ms,
                *volume,
                sample_rate,
            ),
        }
    }
}
