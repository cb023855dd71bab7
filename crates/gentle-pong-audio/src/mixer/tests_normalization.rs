//! Tests for peak normalization.

use super::*;
use crate::error::AudioError;

#[test]
fn test_normalize_loud_audio() {
    let samples = vec![2.0, -1.5, 3.0, -2.5];
    let output = normalize(&samples, 0.9).unwrap();
    assert!((peak(&output) - 0.9).abs() < 1e-12);
}

#[test]
fn test_normalize_never_amplifies() {
    let samples = vec![0.01, -0.005, 0.008, -0.003];
    let output = normalize(&samples, 0.9).unwrap();
    assert_eq!(output, samples);
}

#[test]
fn test_normalize_at_target_is_identity() {
    let samples = vec![0.9, -0.45, 0.3];
    let output = normalize(&samples, 0.9).unwrap();
    assert_eq!(output, samples);
}

#[test]
fn test_normalize_silent_audio() {
    let samples = vec![0.0; 16];
    let output = normalize(&samples, 0.9).unwrap();
    // Treated as peak 1.0 > 0.9, scaling zeros keeps them zero
    assert!(output.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_silent_audio_with_high_ceiling() {
    let samples = vec![0.0; 16];
    let output = normalize(&samples, 1.5).unwrap();
    assert_eq!(output, samples);
}

#[test]
fn test_normalize_negative_peak_governs() {
    let samples = vec![0.5, -4.0, 1.0];
    let output = normalize(&samples, 1.0).unwrap();
    assert!((output[1] + 1.0).abs() < 1e-12);
    assert!((output[0] - 0.125).abs() < 1e-12);
}

#[test]
fn test_normalize_preserves_relative_amplitudes() {
    let samples = vec![2.0, 1.0, 0.5];
    let output = normalize(&samples, 0.5).unwrap();
    assert!((output[1] / output[0] - 0.5).abs() < 1e-12);
    assert!((output[2] / output[0] - 0.25).abs() < 1e-12);
}

#[test]
fn test_normalize_bounded_for_many_peaks() {
    for target in [0.1, 0.5, 0.9, 1.0] {
        let samples: Vec<f64> = (0..500).map(|i| (i as f64 * 0.37).sin() * 7.3).collect();
        let output = normalize(&samples, target).unwrap();
        assert!(peak(&output) <= target + 1e-12, "target {}", target);
    }
}

#[test]
fn test_normalize_rejects_empty_buffer() {
    assert!(matches!(
        normalize(&[], 0.9),
        Err(AudioError::EmptyBuffer { .. })
    ));
}

#[test]
fn test_normalize_rejects_bad_peak() {
    assert!(normalize(&[0.5], 0.0).is_err());
    assert!(normalize(&[0.5], -1.0).is_err());
    assert!(normalize(&[0.5], f64::NAN).is_err());
}
