//! Final fade-out and silence padding.

use std::f64::consts::PI;

use crate::error::{check_sample_rate, frames_for, AudioError, AudioResult};

/// Length of the exact-zero padding added at both ends, in seconds.
pub const PAD_SECONDS: f64 = 0.05;

/// Applies a half-cosine fade-out and pads both ends with silence.
///
/// The last `min(round(fade_ms * sample_rate / 1000), len)` samples are scaled
/// by `0.5 * (1 + cos(pi * i / F))`. 50ms of exact zeros then go on each end,
/// outside the fade, so playback devices open and close on silence.
///
/// # Arguments
/// * `samples` - Input buffer (must not be empty)
/// * `fade_ms` - Fade length in milliseconds (>= 0)
/// * `sample_rate` - Audio sample rate in Hz
pub fn fade_out(samples: &[f64], fade_ms: f64, sample_rate: u32) -> AudioResult<Vec<f64>> {
    check_sample_rate(sample_rate)?;
    if samples.is_empty() {
        return Err(AudioError::empty_buffer("fade_out"));
    }
    if !fade_ms.is_finite() || fade_ms < 0.0 {
        return Err(AudioError::invalid_param(
            "fade.fade_ms",
            format!("must be a finite value >= 0, got {}", fade_ms),
        ));
    }

    let pad = frames_for(sample_rate, PAD_SECONDS);
    let fade_frames = frames_for(sample_rate, fade_ms / 1000.0).min(samples.len());
    let start = samples.len() - fade_frames;

    let mut output = Vec::with_capacity(samples.len() + 2 * pad);
    output.resize(pad, 0.0);
    output.extend_from_slice(&samples[..start]);
    for (i, &s) in samples[start..].iter().enumerate() {
        let t = i as f64 / fade_frames as f64;
        output.push(s * 0.5 * (1.0 + (PI * t).cos()));
    }
    output.resize(output.len() + pad, 0.0);

    Ok(output)
}
