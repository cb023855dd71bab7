//! WAV file writer builder pattern.

use super::format::WavFormat;
use super::writer::{pcm16_to_bytes, to_int16, write_wav_to_vec};

/// WAV file writer builder.
#[derive(Debug)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a new WAV writer with mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Returns the format this writer encodes.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Encodes already quantized samples.
    pub fn write_pcm16(&self, samples: &[i16]) -> Vec<u8> {
        write_wav_to_vec(&self.format, &pcm16_to_bytes(samples))
    }

    /// Quantizes and encodes float samples.
    pub fn write_mono(&self, samples: &[f64]) -> Vec<u8> {
        self.write_pcm16(&to_int16(samples))
    }

    /// Returns the BLAKE3 hash of the PCM payload (not the full WAV file).
    pub fn pcm_hash(&self, samples: &[i16]) -> String {
        blake3::hash(&pcm16_to_bytes(samples)).to_hex().to_string()
    }
}
