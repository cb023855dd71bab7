//! Fixed post-processing chain.
//!
//! lowpass -> reverb -> trim_silence -> fade_out -> normalize -> to_int16.
//! The reverb tail is left unfiltered, trimming only sees the finished tail,
//! the fade shapes the trimmed end, and the peak is measured on the final signal.

use serde::{Deserialize, Serialize};

use super::{fade, lowpass, reverb, trim};
use crate::error::{check_sample_rate, AudioError, AudioResult};
use crate::mixer::normalize;
use crate::wav::to_int16;

/// Parameters for [`process_chain`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Lowpass cutoff in Hz.
    pub cutoff_hz: f64,
    /// Number of cascaded lowpass stages.
    pub poles: usize,
    /// Reverb reference tap attenuation.
    pub decay: f64,
    /// Reverb tap delays in milliseconds.
    pub delays_ms: Vec<f64>,
    /// Reverb tail length in seconds.
    pub tail_s: f64,
    /// Silence threshold for trimming.
    pub trim_threshold: f64,
    /// Trim granularity in samples.
    pub trim_chunk: usize,
    /// Final fade-out length in milliseconds.
    pub fade_ms: f64,
    /// Normalization ceiling.
    pub peak: f64,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            cutoff_hz: 2800.0,
            poles: 2,
            decay: 0.35,
            delays_ms: reverb::DEFAULT_DELAYS_MS.to_vec(),
            tail_s: 1.5,
            trim_threshold: 0.0001,
            trim_chunk: 200,
            fade_ms: 200.0,
            peak: 0.9,
        }
    }
}

impl ChainParams {
    /// Darker filter and a long, spacious seven-tap hall.
    pub fn hall() -> Self {
        Self {
            cutoff_hz: 1800.0,
            poles: 3,
            decay: 0.5,
            delays_ms: vec![41.0, 89.0, 149.0, 211.0, 283.0, 367.0, 449.0],
            ..Self::default()
        }
    }

    /// Checks every parameter without touching any audio.
    pub fn validate(&self) -> AudioResult<()> {
        if !self.cutoff_hz.is_finite() || self.cutoff_hz <= 0.0 {
            return Err(AudioError::InvalidFrequency {
                freq: self.cutoff_hz,
            });
        }
        if self.poles == 0 {
            return Err(AudioError::invalid_param("poles", "must be at least 1"));
        }
        reverb::validate(self.decay, &self.delays_ms, self.tail_s)?;
        if !self.trim_threshold.is_finite() || self.trim_threshold < 0.0 {
            return Err(AudioError::invalid_param(
                "trim.threshold",
                format!("must be a finite value >= 0, got {}", self.trim_threshold),
            ));
        }
        if self.trim_chunk == 0 {
            return Err(AudioError::invalid_param("trim.chunk", "must be at least 1"));
        }
        if !self.fade_ms.is_finite() || self.fade_ms < 0.0 {
            return Err(AudioError::invalid_param(
                "fade.fade_ms",
                format!("must be a finite value >= 0, got {}", self.fade_ms),
            ));
        }
        if !self.peak.is_finite() || self.peak <= 0.0 {
            return Err(AudioError::invalid_param(
                "peak",
                format!("must be > 0, got {}", self.peak),
            ));
        }
        Ok(())
    }

    /// Longest reverb tap delay in milliseconds.
    pub fn max_delay_ms(&self) -> f64 {
        self.delays_ms.iter().copied().fold(0.0_f64, f64::max)
    }
}

/// Runs the full post-processing chain on a mixed buffer.
///
/// # Arguments
/// * `samples` - Mixed buffer from the mixer (must not be empty)
/// * `sample_rate` - Audio sample rate in Hz
/// * `params` - Chain configuration
///
/// # Returns
/// Quantized 16-bit samples ready for encoding
pub fn process_chain(
    samples: &[f64],
    sample_rate: u32,
    params: &ChainParams,
) -> AudioResult<Vec<i16>> {
    check_sample_rate(sample_rate)?;
    params.validate()?;
    if samples.is_empty() {
        return Err(AudioError::empty_buffer("process_chain"));
    }

    let s = lowpass::lowpass(samples, params.cutoff_hz, sample_rate, params.poles)?;
    let s = reverb::reverb(&s, sample_rate, params.decay, &params.delays_ms, params.tail_s)?;
    let s = trim::trim_silence(&s, params.trim_threshold, params.trim_chunk)?;
    let s = fade::fade_out(&s, params.fade_ms, sample_rate)?;
    let s = normalize(&s, params.peak)?;
    Ok(to_int16(&s))
}
