//! Tests for the layer mixer.

use super::*;

#[test]
fn test_mixer_empty() {
    let mixer = Mixer::new();
    assert!(mixer.is_empty());
    assert!(mixer.into_samples().is_empty());
}

#[test]
fn test_mixer_single_layer() {
    let mut mixer = Mixer::new();
    mixer.add_at(&[0.5; 100], 0);
    let output = mixer.into_samples();
    assert_eq!(output.len(), 100);
    assert!(output.iter().all(|&s| s == 0.5));
}

#[test]
fn test_mixer_sums_layers() {
    let mut mixer = Mixer::new();
    mixer.add_at(&[0.3; 100], 0);
    mixer.add_at(&[0.2; 100], 0);
    mixer.add_at(&[0.1; 100], 0);
    let output = mixer.into_samples();
    assert!(output.iter().all(|&s| (s - 0.6).abs() < 1e-12));
}

#[test]
fn test_mixer_pads_shorter_layers() {
    let mut mixer = Mixer::new();
    mixer.add_at(&[1.0; 30], 0);
    mixer.add_at(&[1.0; 100], 0);
    let output = mixer.into_samples();
    assert_eq!(output.len(), 100);
    assert_eq!(output[10], 2.0);
    assert_eq!(output[50], 1.0);
}

#[test]
fn test_mixer_partial_overlap() {
    let mut mixer = Mixer::new();
    mixer.add_at(&[0.5; 50], 0); // Samples 0-49
    mixer.add_at(&[0.3; 50], 25); // Samples 25-74

    assert_eq!(mixer.len(), 75);
    let output = mixer.into_samples();
    // Samples 0-24: only first layer (0.5)
    assert!((output[10] - 0.5).abs() < 1e-12);
    // Samples 25-49: both layers overlap (0.5 + 0.3 = 0.8)
    assert!((output[30] - 0.8).abs() < 1e-12);
    // Samples 50-74: only second layer (0.3)
    assert!((output[60] - 0.3).abs() < 1e-12);
}

#[test]
fn test_mixer_with_length_keeps_trailing_silence() {
    let mut mixer = Mixer::with_length(200);
    mixer.add_at(&[1.0; 10], 5);
    let output = mixer.into_samples();
    assert_eq!(output.len(), 200);
    assert_eq!(output[4], 0.0);
    assert_eq!(output[5], 1.0);
    assert!(output[15..].iter().all(|&s| s == 0.0));
}

#[test]
fn test_mixer_grows_past_initial_length() {
    let mut mixer = Mixer::with_length(10);
    mixer.add_at(&[1.0; 10], 8);
    assert_eq!(mixer.len(), 18);
}
