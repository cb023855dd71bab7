//! Note mixing and peak limiting.
//!
//! This module combines oscillator output into one mono buffer using one of
//! three patterns (single, chord, sequence), and limits the peak of finished
//! audio before quantization.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_patterns;

// Re-export public API
pub use mixer::{mix_chord, mix_sequence, mix_single, Mixer, SEQUENCE_HEADROOM_SECONDS};
pub use processing::{normalize, peak};
pub use types::MixPattern;
