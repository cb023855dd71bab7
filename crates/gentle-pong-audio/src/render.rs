//! One-call rendering from a sound description to an encoded WAV.

use crate::effects::{process_chain, ChainParams};
use crate::error::AudioResult;
use crate::mixer::MixPattern;
use crate::synthesis::Instrument;
use crate::wav::WavResult;

/// Renders `pattern` on `instrument`, runs the post-processing chain and
/// encodes the result.
///
/// # Arguments
/// * `instrument` - Voice from the oscillator bank
/// * `pattern` - Single note, chord or sequence
/// * `sample_rate` - Audio sample rate in Hz
/// * `chain` - Post-processing parameters
///
/// # Returns
/// Encoded mono WAV and its PCM hash
pub fn render_sound(
    instrument: Instrument,
    pattern: &MixPattern,
    sample_rate: u32,
    chain: &ChainParams,
) -> AudioResult<WavResult> {
    let mixed = pattern.render(instrument, sample_rate)?;
    let pcm = process_chain(&mixed, sample_rate, chain)?;
    Ok(WavResult::from_pcm16(&pcm, sample_rate))
}
