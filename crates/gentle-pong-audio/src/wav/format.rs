//! WAV file format parameters.

/// Size of the canonical RIFF/fmt/data header in bytes.
pub const HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (always 1 for this implementation).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
