//! Gentle Pong Audio Core
//!
//! Deterministic synthesis of short notification sounds.
//!
//! # Overview
//!
//! Sounds are built in three stages:
//!
//! - **Oscillator bank** - five additive instruments (glockenspiel, sine,
//!   marimba, ambient, bowl), each a pure function of frequency, duration,
//!   volume and sample rate
//! - **Mixer** - a single note, a chord sharing the volume, or an overlapping
//!   sequence at a fixed stride
//! - **Signal chain** - lowpass, multi-tap reverb, silence trim, fade and
//!   padding, peak normalization and 16-bit quantization
//!
//! # Determinism
//!
//! Nothing in this crate uses randomness, clocks or global state. The same
//! parameters always produce byte-identical WAV output, which is checked
//! through the BLAKE3 hash of the PCM payload.
//!
//! # Example
//!
//! ```
//! use gentle_pong_audio::{render_sound, ChainParams, Instrument, MixPattern};
//!
//! let pattern = MixPattern::Single {
//!     frequency: 392.0,
//!     duration_ms: 200.0,
//!     volume: 0.15,
//! };
//! let wav = render_sound(Instrument::Sine, &pattern, 44100, &ChainParams::default()).unwrap();
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesis`] - Partial tables and the instrument bank
//! - [`envelope`] - Attack, fade, tremolo and release curves
//! - [`mixer`] - Single, chord and sequence mixing; normalization
//! - [`effects`] - Lowpass, reverb, trim, fade and the fixed chain
//! - [`wav`] - Quantization and deterministic WAV encoding
//! - [`render_sound()`] - Pattern to encoded WAV in one call

pub mod effects;
pub mod envelope;
pub mod error;
pub mod mixer;
pub mod render;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use effects::{process_chain, ChainParams};
pub use error::{AudioError, AudioResult};
pub use mixer::{mix_chord, mix_sequence, mix_single, normalize, MixPattern};
pub use render::render_sound;
pub use synthesis::{sine_tone, synthesize, Instrument};
pub use wav::{silence, to_int16, WavResult, WavWriter};
