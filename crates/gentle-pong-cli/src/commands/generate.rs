//! Generate command implementation
//!
//! Renders every preset, writes the WAV files, the manifest and the
//! Bluetooth pre-roll silence, then optionally plays the results.

use anyhow::{Context, Result};
use colored::Colorize;
use gentle_pong_audio::wav::{silence, SILENCE_MS};
use gentle_pong_audio::{render_sound, Instrument};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use super::preview::{self, PREVIEW_ALL_FILE};
use crate::manifest::{sha256_hex, Manifest, SoundEntry};
use crate::pack::{write_file, PackLayout};
use crate::presets::{self, PACK_NAME, SAMPLE_RATE};

/// One written sound file.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSound {
    /// Notification category.
    pub category: String,
    /// File name inside the sounds directory.
    pub file: String,
    /// Human label.
    pub label: String,
    /// Instrument used.
    pub instrument: Instrument,
    /// Mix pattern name.
    pub pattern: String,
    /// Absolute or root-relative path of the written file.
    pub path: PathBuf,
    /// SHA-256 of the full WAV file (as written to the manifest).
    pub sha256: String,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Number of frames.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

/// Machine-readable result of a `generate` run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    /// Pack name.
    pub pack: String,
    /// Pack directory.
    pub pack_dir: PathBuf,
    /// Manifest path.
    pub manifest: PathBuf,
    /// Silence file path.
    pub silence: PathBuf,
    /// Every sound, in manifest order.
    pub sounds: Vec<GeneratedSound>,
    /// Combined preview, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_all: Option<PathBuf>,
}

/// Renders and installs the whole pack under `layout`.
///
/// `on_sound` is called after each file is written, in manifest order.
pub fn generate_pack<F>(layout: &PackLayout, mut on_sound: F) -> Result<(Manifest, Vec<GeneratedSound>)>
where
    F: FnMut(&GeneratedSound),
{
    layout.create_dirs()?;
    let chain = presets::chain_params();

    let mut manifest = Manifest::new();
    let mut sounds = Vec::new();

    for (category, preset) in presets::all_sounds() {
        let wav = render_sound(preset.instrument, &preset.pattern, SAMPLE_RATE, &chain)
            .with_context(|| format!("Failed to render {}", preset.file))?;

        let path = layout.sound_path(preset.file);
        write_file(&path, &wav.wav_data)?;
        let sha256 = sha256_hex(&wav.wav_data);

        manifest.add_sound(
            category,
            SoundEntry {
                file: PackLayout::manifest_entry(preset.file),
                label: preset.label.to_string(),
                sha256: sha256.clone(),
            },
        );

        let sound = GeneratedSound {
            category: category.to_string(),
            file: preset.file.to_string(),
            label: preset.label.to_string(),
            instrument: preset.instrument,
            pattern: preset.pattern.kind().to_string(),
            path,
            sha256,
            pcm_hash: wav.pcm_hash.clone(),
            num_samples: wav.num_samples,
            duration_seconds: wav.duration_seconds(),
        };
        on_sound(&sound);
        sounds.push(sound);
    }

    manifest.write(&layout.manifest_path)?;

    let pre_roll = silence(SAMPLE_RATE, SILENCE_MS).context("Failed to render silence")?;
    write_file(&layout.silence_path, &pre_roll.wav_data)?;

    Ok((manifest, sounds))
}

/// Run the generate command
///
/// # Arguments
/// * `root` - Install root (default: `~/.claude/hooks/peon-ping`)
/// * `preview` - Play each sound after writing it
/// * `preview_all` - Build and play `preview_all.wav` in the working directory
/// * `player` - Audio player command
/// * `json` - Print a machine-readable summary instead of text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    root: Option<&str>,
    preview: bool,
    preview_all: bool,
    player: &str,
    json: bool,
) -> Result<ExitCode> {
    let layout = PackLayout::resolve(root)?;

    if !json {
        println!("{}", "Generating sounds (multi-timbre)...".cyan().bold());
        println!();
    }

    let (_, sounds) = generate_pack(&layout, |sound| {
        if !json {
            println!(
                "  {:20} [{:13}] {:20} {}...",
                sound.category,
                sound.instrument,
                sound.file,
                &sound.sha256[..12]
            );
        }
        if preview {
            play_or_warn(player, &sound.path);
        }
    })?;

    if !json {
        println!();
        println!(
            "{} {}",
            "Manifest:".blue().bold(),
            layout.manifest_path.display()
        );
        println!(
            "{} {}",
            "Silence:".blue().bold(),
            layout.silence_path.display()
        );
        println!();
        println!(
            "{} Pack installed at: {}",
            "SUCCESS".green().bold(),
            layout.pack_dir.display()
        );
    }

    let mut preview_path = None;
    if preview_all {
        let out = std::env::current_dir()
            .context("Failed to resolve working directory")?
            .join(PREVIEW_ALL_FILE);
        let sources: Vec<&PathBuf> = sounds.iter().map(|s| &s.path).collect();
        let seconds = preview::write_preview_all(&sources, &out, SAMPLE_RATE)?;
        if !json {
            println!(
                "{} Preview: {} ({:.1}s)",
                "INFO".blue().bold(),
                out.display(),
                seconds
            );
        }
        play_or_warn(player, &out);
        preview_path = Some(out);
    }

    if json {
        let summary = GenerationSummary {
            pack: PACK_NAME.to_string(),
            pack_dir: layout.pack_dir.clone(),
            manifest: layout.manifest_path.clone(),
            silence: layout.silence_path.clone(),
            sounds,
            preview_all: preview_path,
        };
        let output =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", output);
    }

    Ok(ExitCode::SUCCESS)
}

/// Playback problems never abort generation.
fn play_or_warn(player: &str, path: &std::path::Path) {
    if let Err(e) = preview::play(player, path) {
        eprintln!("{} {:#}", "WARN".yellow().bold(), e);
    }
}
