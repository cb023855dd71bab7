//! Encoded WAV result type.

use crate::error::{check_sample_rate, frames_for, AudioError, AudioResult};

use super::format::WavFormat;
use super::writer::{pcm16_to_bytes, write_wav_to_vec};

/// Length of the pre-roll clip that wakes Bluetooth audio sinks.
pub const SILENCE_MS: f64 = 300.0;

/// Result of WAV encoding.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from quantized mono samples.
    pub fn from_pcm16(samples: &[i16], sample_rate: u32) -> Self {
        let pcm = pcm16_to_bytes(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Encodes `duration_ms` of exact digital silence.
pub fn silence(sample_rate: u32, duration_ms: f64) -> AudioResult<WavResult> {
    check_sample_rate(sample_rate)?;
    if !duration_ms.is_finite() || duration_ms < 0.0 {
        return Err(AudioError::InvalidDuration { duration_ms });
    }
    let frames = frames_for(sample_rate, duration_ms / 1000.0);
    Ok(WavResult::from_pcm16(&vec![0i16; frames], sample_rate))
}
