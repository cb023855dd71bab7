//! Trailing-silence trimmer.
//!
//! Trimming works in whole chunks from the end of the buffer, not sample by
//! sample. A reverb tail that has decayed below the threshold is dropped in
//! `chunk_size` steps, and the fade that follows always lands near the real
//! end of the sound.

use crate::error::{AudioError, AudioResult};

/// Returns true if every sample in `chunk` is quieter than `threshold`.
#[inline]
fn is_silent(chunk: &[f64], threshold: f64) -> bool {
    chunk.iter().all(|s| s.abs() < threshold)
}

/// Removes trailing silent chunks.
///
/// Repeatedly drops the last `chunk_size` samples while all of them have an
/// absolute value below `threshold`. Stops as soon as the buffer is no longer
/// than one chunk or the trailing chunk holds a sample at or above the threshold.
///
/// # Arguments
/// * `samples` - Input buffer (must not be empty)
/// * `threshold` - Silence threshold (>= 0)
/// * `chunk_size` - Trim granularity in samples (>= 1)
pub fn trim_silence(samples: &[f64], threshold: f64, chunk_size: usize) -> AudioResult<Vec<f64>> {
    if samples.is_empty() {
        return Err(AudioError::empty_buffer("trim_silence"));
    }
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AudioError::invalid_param(
            "trim.threshold",
            format!("must be a finite value >= 0, got {}", threshold),
        ));
    }
    if chunk_size == 0 {
        return Err(AudioError::invalid_param("trim.chunk", "must be at least 1"));
    }

    let mut end = samples.len();
    while end > chunk_size && is_silent(&samples[end - chunk_size..end], threshold) {
        end -= chunk_size;
    }

    Ok(samples[..end].to_vec())
}
