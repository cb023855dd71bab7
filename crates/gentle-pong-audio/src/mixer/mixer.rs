//! Mono mixer and the three note-combination patterns.

use crate::error::{check_sample_rate, frames_for, AudioError, AudioResult};
use crate::synthesis::{synthesize, Instrument};

/// Trailing room after the last note of a sequence, in seconds.
pub const SEQUENCE_HEADROOM_SECONDS: f64 = 0.5;

/// Mono mixer that sums layers placed at frame offsets.
///
/// The output grows to hold every layer in full, so nothing is ever cut off.
#[derive(Debug, Default)]
pub struct Mixer {
    /// Running sum of all layers.
    buffer: Vec<f64>,
}

impl Mixer {
    /// Creates an empty mixer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mixer with at least `num_samples` of (silent) output.
    pub fn with_length(num_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; num_samples],
        }
    }

    /// Adds `samples` starting at frame `offset`.
    pub fn add_at(&mut self, samples: &[f64], offset: usize) {
        let end = offset + samples.len();
        if end > self.buffer.len() {
            self.buffer.resize(end, 0.0);
        }
        for (out, &s) in self.buffer[offset..end].iter_mut().zip(samples) {
            *out += s;
        }
    }

    /// Current output length.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been mixed yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consumes the mixer and returns the summed buffer.
    pub fn into_samples(self) -> Vec<f64> {
        self.buffer
    }
}

fn require_notes(frequencies: &[f64], name: &str) -> AudioResult<()> {
    if frequencies.is_empty() {
        return Err(AudioError::invalid_param(
            name,
            "must contain at least one frequency",
        ));
    }
    Ok(())
}

/// Renders a single note.
pub fn mix_single(
    instrument: Instrument,
    frequency: f64,
    duration_ms: f64,
    volume: f64,
    sample_rate: u32,
) -> AudioResult<Vec<f64>> {
    synthesize(instrument, frequency, duration_ms, volume, sample_rate)
}

/// Renders simultaneous notes, splitting `volume` evenly between voices.
///
/// The output is as long as the longest voice.
pub fn mix_chord(
    instrument: Instrument,
    frequencies: &[f64],
    duration_ms: f64,
    volume: f64,
    sample_rate: u32,
) -> AudioResult<Vec<f64>> {
    require_notes(frequencies, "chord.frequencies")?;
    let per_voice = volume / frequencies.len() as f64;

    let mut mixer = Mixer::new();
    for &freq in frequencies {
        let voice = synthesize(instrument, freq, duration_ms, per_voice, sample_rate)?;
        mixer.add_at(&voice, 0);
    }
    Ok(mixer.into_samples())
}

/// Renders overlapping notes at a fixed stride.
///
/// The stride is a third of the first note plus `gap_ms`. The buffer holds the
/// last note's full tail plus 0.5s of headroom; overlapping notes sum.
pub fn mix_sequence(
    instrument: Instrument,
    notes: &[f64],
    gap_ms: f64,
    duration_ms: f64,
    volume: f64,
    sample_rate: u32,
) -> AudioResult<Vec<f64>> {
    check_sample_rate(sample_rate)?;
    require_notes(notes, "sequence.notes")?;
    if !gap_ms.is_finite() || gap_ms < 0.0 {
        return Err(AudioError::invalid_param(
            "sequence.gap_ms",
            format!("must be a finite value >= 0, got {}", gap_ms),
        ));
    }

    let voices = notes
        .iter()
        .map(|&freq| synthesize(instrument, freq, duration_ms, volume, sample_rate))
        .collect::<AudioResult<Vec<_>>>()?;

    let gap_frames = frames_for(sample_rate, gap_ms / 1000.0);
    let stride = (voices[0].len() / 3).max(1) + gap_frames;
    let last_end = voices
        .iter()
        .enumerate()
        .map(|(k, v)| k * stride + v.len())
        .max()
        .unwrap_or(0);
    let headroom = frames_for(sample_rate, SEQUENCE_HEADROOM_SECONDS);

    let mut mixer = Mixer::with_length(last_end + headroom);
    for (k, voice) in voices.iter().enumerate() {
        mixer.add_at(voice, k * stride);
    }
    Ok(mixer.into_samples())
}
