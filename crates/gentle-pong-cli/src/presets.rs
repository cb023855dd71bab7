//! The gentle_pong sound table.
//!
//! Each notification category gets its own timbre so events are told apart
//! by ear. Pitches are drawn from C major pentatonic:
//! C3=131 D3=147 E3=165 G3=196 A3=220, C4=262 D4=294 E4=330 G4=392 A4=440.

use gentle_pong_audio::{ChainParams, Instrument, MixPattern};
use serde::Serialize;

/// Pack identifier, also the directory name under `packs/`.
pub const PACK_NAME: &str = "gentle_pong";

/// Sample rate of every file in the pack.
pub const SAMPLE_RATE: u32 = 44100;

/// One sound file in the pack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundPreset {
    /// File name inside the sounds directory.
    pub file: &'static str,
    /// Human label written to the manifest.
    pub label: &'static str,
    /// Voice used for every note.
    pub instrument: Instrument,
    /// How the notes are combined.
    pub pattern: MixPattern,
}

/// All sounds for one notification category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPresets {
    /// Category name, e.g. `task.complete`.
    pub name: &'static str,
    /// Sounds, in manifest order.
    pub sounds: Vec<SoundPreset>,
}

/// Post-processing used for the whole pack: the long, darker hall.
pub fn chain_params() -> ChainParams {
    ChainParams::hall()
}

fn single(
    file: &'static str,
    label: &'static str,
    instrument: Instrument,
    frequency: f64,
    duration_ms: f64,
    volume: f64,
) -> SoundPreset {
    SoundPreset {
        file,
        label,
        instrument,
        pattern: MixPattern::Single {
            frequency,
            duration_ms,
            volume,
        },
    }
}

fn chord(
    file: &'static str,
    label: &'static str,
    instrument: Instrument,
    frequencies: &[f64],
    duration_ms: f64,
    volume: f64,
) -> SoundPreset {
    SoundPreset {
        file,
        label,
        instrument,
        pattern: MixPattern::Chord {
            frequencies: frequencies.to_vec(),
            duration_ms,
            volume,
        },
    }
}

fn sequence(
    file: &'static str,
    label: &'static str,
    instrument: Instrument,
    notes: &[f64],
    gap_ms: f64,
    duration_ms: f64,
    volume: f64,
) -> SoundPreset {
    SoundPreset {
        file,
        label,
        instrument,
        pattern: MixPattern::Sequence {
            notes: notes.to_vec(),
            gap_ms,
            duration_ms,
            volume,
        },
    }
}

/// Returns the full sound table in category order.
pub fn categories() -> Vec<CategoryPresets> {
    use Instrument::*;

    vec![
        // Singing bowl chord: deep and resonant
        CategoryPresets {
            name: "session.start",
            sounds: vec![
                chord("start_chord.wav", "Bowl chord", Bowl, &[131.0, 165.0, 196.0], 1800.0, 0.3),
                chord("start_fifth.wav", "Bowl fifth", Bowl, &[131.0, 196.0], 1500.0, 0.28),
            ],
        },
        // Tiny sine blip: just a nod
        CategoryPresets {
            name: "task.acknowledge",
            sounds: vec![
                single("ack_blip.wav", "Sine blip", Sine, 392.0, 200.0, 0.15),
                single("ack_blip2.wav", "Sine blip low", Sine, 330.0, 200.0, 0.15),
            ],
        },
        // Ambient pad chord: warm and wide
        CategoryPresets {
            name: "task.complete",
            sounds: vec![
                chord("done_chord.wav", "Pad chord", Ambient, &[262.0, 330.0, 392.0], 1400.0, 0.28),
                chord("done_resolve.wav", "Pad resolve", Ambient, &[196.0, 262.0], 1200.0, 0.25),
            ],
        },
        // Glockenspiel drop: percussive and metallic
        CategoryPresets {
            name: "task.error",
            sounds: vec![
                sequence("error_drop.wav", "Metal drop", Glockenspiel, &[262.0, 131.0], 200.0, 600.0, 0.25),
                single("error_hit.wav", "Metal hit", Glockenspiel, 147.0, 700.0, 0.22),
            ],
        },
        // Quick sine boop-boop
        CategoryPresets {
            name: "input.required",
            sounds: vec![
                sequence("input_boop.wav", "Boop boop", Sine, &[330.0, 440.0], 60.0, 180.0, 0.22),
                sequence("input_boop2.wav", "Boop boop wide", Sine, &[262.0, 392.0], 60.0, 180.0, 0.22),
            ],
        },
        // Deep bowl hum: slow and patient
        CategoryPresets {
            name: "resource.limit",
            sounds: vec![single("limit_hum.wav", "Deep hum", Bowl, 131.0, 2000.0, 0.18)],
        },
        // Rapid marimba taps
        CategoryPresets {
            name: "user.spam",
            sounds: vec![sequence(
                "spam_taps.wav",
                "Rapid taps",
                Marimba,
                &[392.0, 392.0, 392.0, 440.0],
                40.0,
                150.0,
                0.2,
            )],
        },
    ]
}

/// Iterates `(category, preset)` pairs in manifest order.
pub fn all_sounds() -> Vec<(&'static str, SoundPreset)> {
    categories()
        .into_iter()
        .flat_map(|category| {
            let name = category.name;
            category.sounds.into_iter().map(move |sound| (name, sound))
        })
        .collect()
}
