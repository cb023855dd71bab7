//! Peak limiting for mixed and processed audio.

use crate::error::{AudioError, AudioResult};

/// Largest absolute sample value in `samples`.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales audio down so its peak does not exceed `target_peak`.
///
/// Quiet signals are returned unchanged; this never amplifies. An all-zero
/// buffer is treated as having a peak of 1.0.
///
/// # Arguments
/// * `samples` - Audio samples (must not be empty)
/// * `target_peak` - Ceiling for the absolute sample value (> 0)
pub fn normalize(samples: &[f64], target_peak: f64) -> AudioResult<Vec<f64>> {
    if samples.is_empty() {
        return Err(AudioError::empty_buffer("normalize"));
    }
    if !target_peak.is_finite() || target_peak <= 0.0 {
        return Err(AudioError::invalid_param(
            "peak",
            format!("must be > 0, got {}", target_peak),
        ));
    }

    let mut current_peak = peak(samples);
    if current_peak == 0.0 {
        current_peak = 1.0;
    }

    if current_peak > target_peak {
        let gain = target_peak / current_peak;
        Ok(samples.iter().map(|s| s * gain).collect())
    } else {
        Ok(samples.to_vec())
    }
}
