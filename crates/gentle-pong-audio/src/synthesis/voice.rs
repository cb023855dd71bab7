//! Additive voice rendering.
//!
//! A voice is a small bank of exponentially decaying sine partials shaped by
//! an attack, an optional linear fade-out, an optional tremolo and the shared
//! note release. Every instrument in the bank is a `Voice` with different
//! data; there is exactly one render loop.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::envelope::{linear_fade_out, note_release, Attack, Tremolo};
use crate::error::{check_sample_rate, frames_for, AudioError, AudioResult};

/// A single sinusoidal component of a voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Partial {
    /// Frequency ratio relative to the fundamental (1.0 = fundamental).
    pub ratio: f64,
    /// Relative amplitude.
    pub amplitude: f64,
    /// Exponential decay rate in 1/s (0.0 = no decay).
    pub decay_rate: f64,
    /// Absolute frequency offset in Hz added after the ratio.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub detune_hz: f64,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

impl Partial {
    /// Creates a partial with no detune.
    pub const fn new(ratio: f64, amplitude: f64, decay_rate: f64) -> Self {
        Self {
            ratio,
            amplitude,
            decay_rate,
            detune_hz: 0.0,
        }
    }

    /// Shifts the partial by a fixed number of Hz.
    pub const fn detuned(self, detune_hz: f64) -> Self {
        Self { detune_hz, ..self }
    }

    /// Frequency of this partial for a given fundamental.
    #[inline]
    pub fn frequency(&self, fundamental: f64) -> f64 {
        fundamental * self.ratio + self.detune_hz
    }
}

/// Full description of an instrument voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Partial table, summed in order.
    pub partials: Vec<Partial>,
    /// Attack shape.
    pub attack: Attack,
    /// Optional linear fade-out length in seconds (before the shared release).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out_seconds: Option<f64>,
    /// Optional amplitude wobble applied to the partial sum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tremolo: Option<Tremolo>,
}

impl Voice {
    /// Creates a voice from a partial table and attack.
    pub fn new(partials: Vec<Partial>, attack: Attack) -> Self {
        Self {
            partials,
            attack,
            fade_out_seconds: None,
            tremolo: None,
        }
    }

    /// Adds a linear fade-out before the shared release.
    pub fn with_fade_out(mut self, seconds: f64) -> Self {
        self.fade_out_seconds = Some(seconds);
        self
    }

    /// Adds a tremolo.
    pub fn with_tremolo(mut self, rate_hz: f64, depth: f64) -> Self {
        self.tremolo = Some(Tremolo { rate_hz, depth });
        self
    }

    /// Renders one note.
    ///
    /// # Arguments
    /// * `frequency` - Fundamental frequency in Hz
    /// * `duration_ms` - Note length in milliseconds
    /// * `volume` - Output gain
    /// * `sample_rate` - Audio sample rate in Hz
    ///
    /// # Returns
    /// `round(sample_rate * duration_ms / 1000)` samples; the last one is exactly zero.
    pub fn render(
        &self,
        frequency: f64,
        duration_ms: f64,
        volume: f64,
        sample_rate: u32,
    ) -> AudioResult<Vec<f64>> {
        check_sample_rate(sample_rate)?;
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(AudioError::InvalidFrequency { freq: frequency });
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(AudioError::InvalidDuration { duration_ms });
        }
        if !volume.is_finite() || volume < 0.0 {
            return Err(AudioError::invalid_param(
                "volume",
                format!("must be a finite value >= 0, got {}", volume),
            ));
        }

        let frames = frames_for(sample_rate, duration_ms / 1000.0);
        if frames == 0 {
            return Err(AudioError::InvalidDuration { duration_ms });
        }

        let sr = sample_rate as f64;
        let attack_frames = frames_for(sample_rate, self.attack.seconds());
        let fade_frames = self
            .fade_out_seconds
            .map(|seconds| frames_for(sample_rate, seconds))
            .unwrap_or(0);

        // (angular frequency, amplitude, decay rate) per partial
        let bank: Vec<(f64, f64, f64)> = self
            .partials
            .iter()
            .map(|p| (2.0 * PI * p.frequency(frequency), p.amplitude, p.decay_rate))
            .collect();

        let mut output = Vec::with_capacity(frames);
        for i in 0..frames {
            let t = i as f64 / sr;

            let mut s = 0.0;
            for &(omega, amp, decay) in &bank {
                s += amp * (omega * t).sin() * (-decay * t).exp();
            }
            if let Some(tremolo) = &self.tremolo {
                s *= tremolo.gain(t);
            }

            let gain = self.attack.gain(i, attack_frames)
                * linear_fade_out(i, frames, fade_frames)
                * note_release(i, frames);
            output.push(s * gain * volume);
        }

        Ok(output)
    }
}
