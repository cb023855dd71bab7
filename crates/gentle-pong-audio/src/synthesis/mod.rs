//! Oscillator bank.
//!
//! Five instruments built on one additive model:
//! - `glockenspiel` - Bright metallic bar, fast linear attack
//! - `sine` - Pure tone with linear fades
//! - `marimba` - Warm bar, slightly slower attack
//! - `ambient` - Detuned pad with a slow cosine attack
//! - `bowl` - Singing bowl with slow decays and a 4.1 Hz wobble
//!
//! Every note is `sum(amp * sin(2*pi*f*ratio*t) * exp(-decay*t))` shaped by the
//! instrument's envelopes and the shared release, so each buffer ends on an
//! exact zero.

pub mod instruments;
pub mod voice;

pub use instruments::{sine_tone, sine_voice, synthesize, Instrument, SINE_FADE_MS};
pub use voice::{Partial, Voice};
