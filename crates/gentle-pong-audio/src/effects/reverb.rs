//! Multi-tap echo reverb.
//!
//! A fixed bank of delayed, attenuated copies of the dry signal summed onto
//! the dry signal. There is no feedback path: each tap reads the input only,
//! so tap order never changes the result.

use crate::error::{check_sample_rate, frames_for, AudioError, AudioResult};

/// Tap delays (ms) used when no other list is configured.
pub const DEFAULT_DELAYS_MS: [f64; 5] = [23.0, 53.0, 89.0, 131.0, 173.0];

/// Validates a reverb configuration.
pub(crate) fn validate(decay: f64, delays_ms: &[f64], tail_s: f64) -> AudioResult<()> {
    if !(0.0..=1.0).contains(&decay) {
        return Err(AudioError::invalid_param(
            "reverb.decay",
            format!("must be 0.0-1.0, got {}", decay),
        ));
    }
    if delays_ms.is_empty() {
        return Err(AudioError::invalid_param(
            "reverb.delays_ms",
            "must contain at least one tap",
        ));
    }
    for (i, &d_ms) in delays_ms.iter().enumerate() {
        if !d_ms.is_finite() || d_ms <= 0.0 {
            return Err(AudioError::invalid_param(
                format!("reverb.delays_ms[{}]", i),
                format!("must be > 0 ms, got {}", d_ms),
            ));
        }
    }
    if !tail_s.is_finite() || tail_s < 0.0 {
        return Err(AudioError::invalid_param(
            "reverb.tail_s",
            format!("must be >= 0 seconds, got {}", tail_s),
        ));
    }
    Ok(())
}

/// Attenuation of a tap relative to the reference (first) tap.
///
/// `decay ^ (d_ms / reference_ms)`, so the reference tap is attenuated by
/// exactly `decay` and later taps progressively more.
#[inline]
pub fn tap_attenuation(decay: f64, d_ms: f64, reference_ms: f64) -> f64 {
    decay.powf(d_ms / reference_ms)
}

/// Applies the multi-tap reverb.
///
/// # Arguments
/// * `samples` - Dry input
/// * `sample_rate` - Audio sample rate in Hz
/// * `decay` - Reference tap attenuation (0.0-1.0)
/// * `delays_ms` - Tap delays in milliseconds; the first is the reference tap
/// * `tail_s` - Extra room after the longest tap, in seconds
///
/// # Returns
/// Buffer of `len + max_delay_frames + round(sample_rate * tail_s)` samples
pub fn reverb(
    samples: &[f64],
    sample_rate: u32,
    decay: f64,
    delays_ms: &[f64],
    tail_s: f64,
) -> AudioResult<Vec<f64>> {
    check_sample_rate(sample_rate)?;
    validate(decay, delays_ms, tail_s)?;

    let taps: Vec<(usize, f64)> = delays_ms
        .iter()
        .map(|&d_ms| {
            (
                frames_for(sample_rate, d_ms / 1000.0),
                tap_attenuation(decay, d_ms, delays_ms[0]),
            )
        })
        .collect();
    let max_delay = taps.iter().map(|&(d, _)| d).max().unwrap_or(0);
    let tail = frames_for(sample_rate, tail_s);

    let mut output = vec![0.0; samples.len() + max_delay + tail];
    output[..samples.len()].copy_from_slice(samples);

    for &(delay, attenuation) in &taps {
        for (out, &s) in output[delay..].iter_mut().zip(samples) {
            *out += s * attenuation;
        }
    }

    Ok(output)
}
