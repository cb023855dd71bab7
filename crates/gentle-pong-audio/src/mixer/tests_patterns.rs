//! Tests for single, chord and sequence rendering.

use super::*;
use crate::error::AudioError;
use crate::synthesis::{synthesize, Instrument};

const SR: u32 = 44100;

#[test]
fn test_single_is_plain_synthesis() {
    let single = mix_single(Instrument::Glockenspiel, 147.0, 700.0, 0.22, SR).unwrap();
    let direct = synthesize(Instrument::Glockenspiel, 147.0, 700.0, 0.22, SR).unwrap();
    assert_eq!(single, direct);
}

#[test]
fn test_chord_no_shorter_than_any_voice() {
    let freqs = [262.0, 330.0, 392.0];
    let chord = mix_chord(Instrument::Ambient, &freqs, 800.0, 0.3, SR).unwrap();
    for &f in &freqs {
        let voice = synthesize(Instrument::Ambient, f, 800.0, 0.1, SR).unwrap();
        assert!(chord.len() >= voice.len());
    }
    assert_eq!(chord.len(), 35280);
}

#[test]
fn test_chord_splits_volume_evenly() {
    let freqs = [131.0, 196.0];
    let chord = mix_chord(Instrument::Bowl, &freqs, 300.0, 0.28, SR).unwrap();
    let a = synthesize(Instrument::Bowl, 131.0, 300.0, 0.14, SR).unwrap();
    let b = synthesize(Instrument::Bowl, 196.0, 300.0, 0.14, SR).unwrap();
    for i in 0..chord.len() {
        assert!((chord[i] - (a[i] + b[i])).abs() < 1e-12);
    }
}

#[test]
fn test_chord_ends_at_zero() {
    let chord = mix_chord(Instrument::Marimba, &[262.0, 330.0], 400.0, 0.3, SR).unwrap();
    assert_eq!(*chord.last().unwrap(), 0.0);
}

#[test]
fn test_sequence_layout() {
    let seq = mix_sequence(Instrument::Sine, &[330.0, 440.0], 60.0, 180.0, 0.22, SR).unwrap();
    // note = 7938 frames, stride = 7938 / 3 + 2646 = 5292, headroom = 22050
    assert_eq!(seq.len(), 5292 + 7938 + 22050);

    let first = synthesize(Instrument::Sine, 330.0, 180.0, 0.22, SR).unwrap();
    let second = synthesize(Instrument::Sine, 440.0, 180.0, 0.22, SR).unwrap();
    // Before the second note starts only the first one sounds
    assert_eq!(&seq[..5292], &first[..5292]);
    // Overlap sums additively
    for i in 5292..first.len() {
        assert!((seq[i] - (first[i] + second[i - 5292])).abs() < 1e-12);
    }
    // Headroom is silent
    assert!(seq[5292 + 7938..].iter().all(|&s| s == 0.0));
}

#[test]
fn test_sequence_holds_every_tail() {
    let notes = [392.0, 392.0, 392.0, 440.0];
    let seq = mix_sequence(Instrument::Marimba, &notes, 40.0, 150.0, 0.2, SR).unwrap();
    let note_len = 6615;
    let stride = note_len / 3 + 1764;
    assert_eq!(seq.len(), 3 * stride + note_len + 22050);
}

#[test]
fn test_sequence_minimum_stride() {
    // Two-frame notes: a third rounds down to zero, the stride floor is 1
    let seq = mix_sequence(Instrument::Sine, &[100.0, 100.0], 0.0, 2.0, 1.0, 1000).unwrap();
    assert_eq!(seq.len(), 1 + 2 + 500);
}

#[test]
fn test_empty_note_lists_rejected() {
    assert!(matches!(
        mix_chord(Instrument::Sine, &[], 100.0, 0.3, SR),
        Err(AudioError::InvalidParameter { .. })
    ));
    assert!(matches!(
        mix_sequence(Instrument::Sine, &[], 10.0, 100.0, 0.3, SR),
        Err(AudioError::InvalidParameter { .. })
    ));
    assert!(mix_sequence(Instrument::Sine, &[440.0], -1.0, 100.0, 0.3, SR).is_err());
}

#[test]
fn test_mix_pattern_dispatch() {
    let pattern = MixPattern::Chord {
        frequencies: vec![262.0, 330.0, 392.0],
        duration_ms: 200.0,
        volume: 0.28,
    };
    assert_eq!(pattern.kind(), "chord");
    let rendered = pattern.render(Instrument::Ambient, SR).unwrap();
    let direct = mix_chord(Instrument::Ambient, &[262.0, 330.0, 392.0], 200.0, 0.28, SR).unwrap();
    assert_eq!(rendered, direct);

    let pattern = MixPattern::Sequence {
        notes: vec![262.0, 131.0],
        gap_ms: 200.0,
        duration_ms: 100.0,
        volume: 0.25,
    };
    assert_eq!(pattern.kind(), "sequence");
    assert!(!pattern.render(Instrument::Glockenspiel, SR).unwrap().is_empty());
}

#[test]
fn test_mix_pattern_serde_shape() {
    let pattern = MixPattern::Single {
        frequency: 392.0,
        duration_ms: 200.0,
        volume: 0.15,
    };
    let json = serde_json::to_value(&pattern).unwrap();
    assert_eq!(json["type"], "single");
    assert_eq!(json["frequency"], 392.0);
    let back: MixPattern = serde_json::from_value(json).unwrap();
    assert_eq!(back, pattern);
}
