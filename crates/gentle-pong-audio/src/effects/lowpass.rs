//! Cascaded one-pole lowpass filter.

use std::f64::consts::PI;

use crate::error::{check_sample_rate, AudioError, AudioResult};

/// Calculates the one-pole smoothing coefficient from cutoff frequency.
///
/// `alpha = dt / (rc + dt)` with `rc = 1 / (2*pi*cutoff)` and `dt = 1 / sample_rate`,
/// which lies in (0, 1) for any positive cutoff and sample rate.
pub fn calculate_alpha(cutoff_hz: f64, sample_rate: u32) -> f64 {
    let rc = 1.0 / (2.0 * PI * cutoff_hz);
    let dt = 1.0 / sample_rate as f64;
    dt / (rc + dt)
}

/// Runs one filter stage over `input`.
fn one_pole(input: &[f64], alpha: f64) -> Vec<f64> {
    let mut output = Vec::with_capacity(input.len());
    let mut state = 0.0;
    for &x in input {
        // y[i] = y[i-1] + alpha * (x[i] - y[i-1]), starting from y[-1] = 0
        state += alpha * (x - state);
        output.push(state);
    }
    output
}

/// Applies a lowpass filter made of `poles` cascaded one-pole stages.
///
/// # Arguments
/// * `samples` - Input buffer
/// * `cutoff_hz` - Cutoff frequency in Hz, must be > 0
/// * `sample_rate` - Audio sample rate in Hz
/// * `poles` - Number of cascaded stages, must be >= 1
///
/// # Returns
/// Filtered buffer with the same length as the input
pub fn lowpass(
    samples: &[f64],
    cutoff_hz: f64,
    sample_rate: u32,
    poles: usize,
) -> AudioResult<Vec<f64>> {
    check_sample_rate(sample_rate)?;
    if !cutoff_hz.is_finite() || cutoff_hz <= 0.0 {
        return Err(AudioError::InvalidFrequency { freq: cutoff_hz });
    }
    if poles == 0 {
        return Err(AudioError::invalid_param("poles", "must be at least 1"));
    }

    let alpha = calculate_alpha(cutoff_hz, sample_rate);
    let mut buffer = one_pole(samples, alpha);
    for _ in 1..poles {
        buffer = one_pole(&buffer, alpha);
    }
    Ok(buffer)
}
