//! Tests for the WAV encoding module.

use super::builder::WavWriter;
use super::format::{WavFormat, HEADER_LEN};
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::{silence, WavResult, SILENCE_MS};
use super::writer::{pcm16_to_bytes, to_int16, wav_header, write_wav, write_wav_to_vec};
use crate::error::AudioError;

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

// =========================================================================
// Format tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 88200);
}

#[test]
fn test_byte_rate_various_sample_rates() {
    for &rate in &[8000u32, 22050, 44100, 48000, 96000] {
        assert_eq!(WavFormat::mono(rate).byte_rate(), rate * 2);
    }
}

// =========================================================================
// Quantization tests
// =========================================================================

#[test]
fn test_to_int16_truncates() {
    let quantized = to_int16(&[0.0, 0.5, -0.5, 1.0, -1.0]);
    // 0.5 * 32767 = 16383.5 truncates toward zero
    assert_eq!(quantized, vec![0, 16383, -16383, 32767, -32767]);
}

#[test]
fn test_to_int16_saturates() {
    let quantized = to_int16(&[1.5, 100.0, -1.5, -100.0, f64::INFINITY]);
    assert_eq!(quantized, vec![32767, 32767, -32767, -32767, 32767]);
}

#[test]
fn test_to_int16_monotonic() {
    let inputs: Vec<f64> = (0..=4000).map(|i| -2.0 + i as f64 * 0.001).collect();
    let quantized = to_int16(&inputs);
    for pair in quantized.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_to_int16_empty() {
    assert!(to_int16(&[]).is_empty());
}

#[test]
fn test_pcm16_to_bytes_little_endian() {
    let bytes = pcm16_to_bytes(&[0x0102, -2]);
    assert_eq!(bytes, vec![0x02, 0x01, 0xFE, 0xFF]);
}

// =========================================================================
// Header and writer tests
// =========================================================================

#[test]
fn test_wav_header_layout() {
    let header = wav_header(&WavFormat::mono(44100), 200);
    assert_eq!(header.len(), HEADER_LEN);
    assert_eq!(&header[0..4], b"RIFF");
    assert_eq!(read_u32(&header, 4), 236);
    assert_eq!(&header[8..12], b"WAVE");
    assert_eq!(&header[12..16], b"fmt ");
    assert_eq!(read_u32(&header, 16), 16);
    assert_eq!(read_u16(&header, 20), 1);
    assert_eq!(read_u16(&header, 22), 1);
    assert_eq!(read_u32(&header, 24), 44100);
    assert_eq!(read_u32(&header, 28), 88200);
    assert_eq!(read_u16(&header, 32), 2);
    assert_eq!(read_u16(&header, 34), 16);
    assert_eq!(&header[36..40], b"data");
    assert_eq!(read_u32(&header, 40), 200);
}

#[test]
fn test_write_wav_matches_write_wav_to_vec() {
    let format = WavFormat::mono(22050);
    let pcm = pcm16_to_bytes(&[1, -1, 300, -300]);

    let mut streamed = Vec::new();
    write_wav(&mut streamed, &format, &pcm).unwrap();

    assert_eq!(streamed, write_wav_to_vec(&format, &pcm));
    assert_eq!(streamed.len(), HEADER_LEN + 8);
}

#[test]
fn test_writer_builder() {
    let writer = WavWriter::mono(48000);
    assert_eq!(writer.format(), WavFormat::mono(48000));

    let from_float = writer.write_mono(&[0.5, -0.5]);
    let from_pcm = writer.write_pcm16(&[16383, -16383]);
    assert_eq!(from_float, from_pcm);
    assert_eq!(read_u32(&from_pcm, 24), 48000);
}

#[test]
fn test_writer_is_deterministic() {
    let samples: Vec<i16> = (0..1000).map(|i| (i * 37 % 2000 - 1000) as i16).collect();
    let writer = WavWriter::mono(44100);
    assert_eq!(writer.write_pcm16(&samples), writer.write_pcm16(&samples));
    assert_eq!(writer.pcm_hash(&samples), writer.pcm_hash(&samples));
}

// =========================================================================
// PCM extraction tests
// =========================================================================

#[test]
fn test_extract_pcm_data_roundtrip() {
    let samples = [10i16, -20, 30];
    let wav = WavWriter::mono(44100).write_pcm16(&samples);
    let pcm = extract_pcm_data(&wav).unwrap();
    assert_eq!(pcm, pcm16_to_bytes(&samples).as_slice());
}

#[test]
fn test_extract_pcm_data_skips_unknown_chunks() {
    let pcm = pcm16_to_bytes(&[1, 2]);
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&0u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    // Odd-sized chunk gets a pad byte
    wav.extend_from_slice(b"LIST");
    wav.extend_from_slice(&3u32.to_le_bytes());
    wav.extend_from_slice(&[0, 0, 0, 0]);
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(pcm.len() as u32).to_le_bytes());
    wav.extend_from_slice(&pcm);

    assert_eq!(extract_pcm_data(&wav).unwrap(), pcm.as_slice());
}

#[test]
fn test_extract_pcm_data_rejects_garbage() {
    assert!(extract_pcm_data(&[]).is_none());
    assert!(extract_pcm_data(b"not a wav file at all, really not").is_none());

    // Truncated data chunk
    let mut wav = WavWriter::mono(44100).write_pcm16(&[1, 2, 3]);
    wav.truncate(wav.len() - 2);
    assert!(extract_pcm_data(&wav).is_none());
}

#[test]
fn test_compute_pcm_hash_ignores_header() {
    let samples = [5i16, 6, 7];
    let a = WavWriter::mono(44100).write_pcm16(&samples);
    let b = WavWriter::mono(48000).write_pcm16(&samples);
    assert_ne!(a, b);
    assert_eq!(compute_pcm_hash(&a), compute_pcm_hash(&b));
    assert!(compute_pcm_hash(b"junk").is_none());
}

// =========================================================================
// WavResult tests
// =========================================================================

#[test]
fn test_wav_result_from_pcm16() {
    let samples = vec![0i16; 44100];
    let result = WavResult::from_pcm16(&samples, 44100);

    assert_eq!(result.num_samples, 44100);
    assert_eq!(result.sample_rate, 44100);
    assert_eq!(result.wav_data.len(), HEADER_LEN + 88200);
    assert!((result.duration_seconds() - 1.0).abs() < 1e-12);
    assert_eq!(result.pcm_hash.len(), 64);
    assert_eq!(Some(result.pcm_hash.clone()), compute_pcm_hash(&result.wav_data));
}

#[test]
fn test_wav_result_hash_tracks_content() {
    let a = WavResult::from_pcm16(&[1, 2, 3], 44100);
    let b = WavResult::from_pcm16(&[1, 2, 4], 44100);
    assert_ne!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn test_silence_clip() {
    let clip = silence(44100, SILENCE_MS).unwrap();
    assert_eq!(clip.num_samples, 13230);
    let pcm = extract_pcm_data(&clip.wav_data).unwrap();
    assert!(pcm.iter().all(|&b| b == 0));
}

#[test]
fn test_silence_rejects_bad_input() {
    assert!(matches!(
        silence(0, 300.0),
        Err(AudioError::InvalidSampleRate { rate: 0 })
    ));
    assert!(matches!(
        silence(44100, -1.0),
        Err(AudioError::InvalidDuration { .. })
    ));
}
