//! List command implementation
//!
//! Prints the preset table without rendering anything.

use anyhow::{Context, Result};
use colored::Colorize;
use gentle_pong_audio::{ChainParams, MixPattern};
use serde::Serialize;
use std::process::ExitCode;

use crate::presets::{self, CategoryPresets, PACK_NAME, SAMPLE_RATE};

/// Machine-readable preset table.
#[derive(Debug, Serialize)]
pub struct ListOutput {
    /// Pack name.
    pub pack: &'static str,
    /// Sample rate of every file.
    pub sample_rate: u32,
    /// Post-processing chain.
    pub chain: ChainParams,
    /// Sound table.
    pub categories: Vec<CategoryPresets>,
}

impl ListOutput {
    /// Snapshot of the built-in table.
    pub fn current() -> Self {
        Self {
            pack: PACK_NAME,
            sample_rate: SAMPLE_RATE,
            chain: presets::chain_params(),
            categories: presets::categories(),
        }
    }
}

/// One-line summary of a mix pattern.
pub fn describe_pattern(pattern: &MixPattern) -> String {
    fn hz(freqs: &[f64]) -> String {
        freqs
            .iter()
            .map(|f| format!("{}", f))
            .collect::<Vec<_>>()
            .join("+")
    }

    match pattern {
        MixPattern::Single {
            frequency,
            duration_ms,
            volume,
        } => format!("single {} Hz, {} ms, vol {:.2}", frequency, duration_ms, volume),
        MixPattern::Chord {
            frequencies,
            duration_ms,
            volume,
        } => format!(
            "chord {} Hz, {} ms, vol {:.2}",
            hz(frequencies),
            duration_ms,
            volume
        ),
        MixPattern::Sequence {
            notes,
            gap_ms,
            duration_ms,
            volume,
        } => format!(
            "sequence {} Hz, gap {} ms, {} ms, vol {:.2}",
            hz(notes),
            gap_ms,
            duration_ms,
            volume
        ),
    }
}

/// Run the list command
///
/// # Arguments
/// * `json` - Print the table as JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(json: bool) -> Result<ExitCode> {
    let output = ListOutput::current();

    if json {
        let text =
            serde_json::to_string_pretty(&output).context("Failed to serialize preset table")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} ({} Hz)",
        "Pack:".cyan().bold(),
        output.pack,
        output.sample_rate
    );
    for category in &output.categories {
        println!();
        println!("{}", category.name.bold());
        for sound in &category.sounds {
            println!(
                "  {:18} [{:13}] {:16} {}",
                sound.file,
                sound.instrument,
                sound.label,
                describe_pattern(&sound.pattern).dimmed()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
