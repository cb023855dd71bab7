//! Amplitude envelopes for note synthesis.
//!
//! Envelopes here are per-frame gain functions. A voice combines an attack
//! shape, an optional linear fade-out, an optional tremolo and the shared
//! note release, all multiplied together.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Portion of a note, counted from its start, left untouched by the release.
pub const RELEASE_START: f64 = 0.85;

/// Attack shape applied from the first frame of a note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Attack {
    /// Linear ramp `i / A`.
    Linear {
        /// Attack length in seconds.
        seconds: f64,
    },
    /// Raised cosine `0.5 * (1 - cos(pi * i / A))`.
    Cosine {
        /// Attack length in seconds.
        seconds: f64,
    },
}

impl Attack {
    /// Returns the attack length in seconds.
    pub fn seconds(&self) -> f64 {
        match *self {
            Attack::Linear { seconds } | Attack::Cosine { seconds } => seconds,
        }
    }

    /// Gain at frame `i` of an attack lasting `attack_frames` frames.
    #[inline]
    pub fn gain(&self, i: usize, attack_frames: usize) -> f64 {
        if i >= attack_frames {
            return 1.0;
        }
        let x = i as f64 / attack_frames as f64;
        match self {
            Attack::Linear { .. } => x,
            Attack::Cosine { .. } => 0.5 * (1.0 - (PI * x).cos()),
        }
    }
}

/// Slow sinusoidal amplitude wobble shared by every partial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tremolo {
    /// Wobble rate in Hz.
    pub rate_hz: f64,
    /// Modulation depth (gain swings between `1 - depth` and `1 + depth`).
    pub depth: f64,
}

impl Tremolo {
    /// Gain at time `t` seconds.
    #[inline]
    pub fn gain(&self, t: f64) -> f64 {
        1.0 + self.depth * (2.0 * PI * self.rate_hz * t).sin()
    }
}

/// Linear fade-out over the final `fade_frames` of a note.
///
/// Frame `i` past `frames - fade_frames` is scaled by `(frames - i) / fade_frames`.
#[inline]
pub fn linear_fade_out(i: usize, frames: usize, fade_frames: usize) -> f64 {
    if fade_frames == 0 || i + fade_frames <= frames {
        return 1.0;
    }
    (frames - i) as f64 / fade_frames as f64
}

/// Shared note release: a half-cosine over the final 15% of the note.
///
/// The curve reaches `cos(pi) = -1` exactly on the last frame, so every note
/// ends on an exact zero.
#[inline]
pub fn note_release(i: usize, frames: usize) -> f64 {
    let fade_start = (frames as f64 * RELEASE_START) as usize;
    if i < fade_start {
        return 1.0;
    }
    let span = frames - 1 - fade_start;
    if span == 0 {
        return 0.0;
    }
    let t = (i - fade_start) as f64 / span as f64;
    0.5 * (1.0 + (PI * t).cos())
}
