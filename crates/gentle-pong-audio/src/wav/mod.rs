//! Deterministic WAV encoding.
//!
//! This module quantizes processed audio to 16-bit PCM and writes mono WAV
//! files with no timestamps or variable metadata, so identical audio always
//! produces identical bytes. The BLAKE3 hash of the PCM payload is used for
//! determinism checks.

mod builder;
mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use builder::WavWriter;
pub use format::{WavFormat, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::{silence, WavResult, SILENCE_MS};
pub use writer::{pcm16_to_bytes, to_int16, wav_header, write_wav, write_wav_to_vec};
