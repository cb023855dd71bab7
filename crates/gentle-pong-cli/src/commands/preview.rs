//! Playback helpers for `generate --preview` and `--preview-all`.

use anyhow::{bail, Context, Result};
use gentle_pong_audio::wav::{extract_pcm_data, WavWriter};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Default audio player (macOS).
pub const DEFAULT_PLAYER: &str = "afplay";

/// Silence between clips in the combined preview, in seconds.
pub const PREVIEW_GAP_SECONDS: f64 = 0.5;

/// File name of the combined preview, written to the working directory.
pub const PREVIEW_ALL_FILE: &str = "preview_all.wav";

/// Plays `path` with `<player> -v 1.0 <path>` and waits for it to finish.
pub fn play(player: &str, path: &Path) -> Result<()> {
    let status = Command::new(player)
        .arg("-v")
        .arg("1.0")
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch player '{}'", player))?;
    if !status.success() {
        bail!("Player '{}' exited with {}", player, status);
    }
    Ok(())
}

/// Decodes the 16-bit PCM payload of a WAV file.
pub fn read_pcm16(path: &Path) -> Result<Vec<i16>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let pcm = extract_pcm_data(&bytes)
        .with_context(|| format!("Not a PCM WAV file: {}", path.display()))?;
    Ok(pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect())
}

/// Joins clips, following each one with `gap_frames` of silence.
pub fn concat_with_gaps(clips: &[Vec<i16>], gap_frames: usize) -> Vec<i16> {
    let total = clips.iter().map(|c| c.len() + gap_frames).sum();
    let mut out = Vec::with_capacity(total);
    for clip in clips {
        out.extend_from_slice(clip);
        out.resize(out.len() + gap_frames, 0);
    }
    out
}

/// Builds the combined preview from `sources` and writes it to `out`.
///
/// # Returns
/// Duration of the combined preview in seconds
pub fn write_preview_all<P: AsRef<Path>>(sources: &[P], out: &Path, sample_rate: u32) -> Result<f64> {
    let clips = sources
        .iter()
        .map(|p| read_pcm16(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let gap_frames = (sample_rate as f64 * PREVIEW_GAP_SECONDS).round() as usize;
    let combined = concat_with_gaps(&clips, gap_frames);

    let wav = WavWriter::mono(sample_rate).write_pcm16(&combined);
    fs::write(out, wav).with_context(|| format!("Failed to write {}", out.display()))?;
    Ok(combined.len() as f64 / sample_rate as f64)
}
