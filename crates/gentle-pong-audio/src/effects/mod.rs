//! Signal processing applied after mixing.
//!
//! Each stage is a pure function over a sample buffer and can be used on its
//! own; [`process_chain`] runs them in the fixed order.

pub mod chain;
pub mod fade;
pub mod lowpass;
pub mod reverb;
pub mod trim;

pub use chain::{process_chain, ChainParams};
pub use fade::fade_out;
pub use lowpass::lowpass;
pub use reverb::reverb;
pub use trim::trim_silence;
