//! End-to-end processing chain integration tests.

use gentle_pong_audio::effects::{fade_out, lowpass, reverb, trim_silence};
use gentle_pong_audio::{process_chain, sine_tone, to_int16, AudioError, ChainParams};

const SR: u32 = 44100;
/// 50 ms of padding at 44.1 kHz.
const PAD: usize = 2205;

fn blip() -> Vec<f64> {
    sine_tone(440.0, 200.0, 0.3, 60.0, SR).unwrap()
}

// ============================================================================
// Closed-Form Length Tests
// ============================================================================

#[test]
fn test_chain_length_without_trimming() {
    // With a zero threshold nothing counts as silent, so the length is exact:
    // note + longest tap + tail + padding on both ends.
    let params = ChainParams {
        trim_threshold: 0.0,
        ..ChainParams::default()
    };
    let output = process_chain(&blip(), SR, &params).unwrap();
    assert_eq!(output.len(), 8820 + 7629 + 66150 + 2 * PAD);
}

#[test]
fn test_chain_length_with_default_trimming() {
    let output = process_chain(&blip(), SR, &ChainParams::default()).unwrap();
    let trimmed = output.len() - 2 * PAD;
    let reverberated = 8820 + 7629 + 66150;

    // Trimming removes whole chunks only
    assert_eq!((reverberated - trimmed) % 200, 0);
    // Everything after the last echo is exact silence and goes away
    assert!(trimmed <= reverberated - 66000);
    // The dry note itself is never removed
    assert!(trimmed >= 8820);
}

#[test]
fn test_chain_matches_stage_by_stage() {
    let params = ChainParams::default();
    let input = blip();

    let s = lowpass(&input, params.cutoff_hz, SR, params.poles).unwrap();
    let s = reverb(&s, SR, params.decay, &params.delays_ms, params.tail_s).unwrap();
    let s = trim_silence(&s, params.trim_threshold, params.trim_chunk).unwrap();
    let s = fade_out(&s, params.fade_ms, SR).unwrap();
    let s = gentle_pong_audio::normalize(&s, params.peak).unwrap();

    assert_eq!(process_chain(&input, SR, &params).unwrap(), to_int16(&s));
}

// ============================================================================
// Padding and Peak Tests
// ============================================================================

#[test]
fn test_chain_pads_with_exact_zeros() {
    for params in [ChainParams::default(), ChainParams::hall()] {
        let output = process_chain(&blip(), SR, &params).unwrap();
        assert!(output[..PAD].iter().all(|&s| s == 0));
        assert!(output[output.len() - PAD..].iter().all(|&s| s == 0));
    }
}

#[test]
fn test_chain_respects_peak_ceiling() {
    // A loud input must come out at or under the ceiling
    let loud = sine_tone(220.0, 300.0, 4.0, 60.0, SR).unwrap();
    let output = process_chain(&loud, SR, &ChainParams::default()).unwrap();
    let ceiling = (0.9 * 32767.0) as i16;
    let peak = output.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak as i32 <= ceiling as i32 + 1);
    assert!(peak as i32 >= ceiling as i32 - 1);
}

#[test]
fn test_chain_never_amplifies_quiet_input() {
    let quiet = sine_tone(440.0, 200.0, 0.01, 60.0, SR).unwrap();
    let output = process_chain(&quiet, SR, &ChainParams::default()).unwrap();
    let peak = output.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak < 3000);
}

#[test]
fn test_chain_handles_all_zero_input() {
    let output = process_chain(&[0.0; 500], SR, &ChainParams::default()).unwrap();
    assert!(output.iter().all(|&s| s == 0));
}

// ============================================================================
// Determinism and Error Tests
// ============================================================================

#[test]
fn test_chain_is_deterministic() {
    let params = ChainParams::hall();
    let a = process_chain(&blip(), SR, &params).unwrap();
    let b = process_chain(&blip(), SR, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_chain_rejects_bad_input() {
    assert!(matches!(
        process_chain(&[], SR, &ChainParams::default()),
        Err(AudioError::EmptyBuffer { .. })
    ));
    assert!(matches!(
        process_chain(&blip(), 0, &ChainParams::default()),
        Err(AudioError::InvalidSampleRate { .. })
    ));
    let params = ChainParams {
        cutoff_hz: -5.0,
        ..ChainParams::default()
    };
    assert!(process_chain(&blip(), SR, &params).is_err());
}
