//! CESP 1.0 pack manifest (`openpeon.json`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

use crate::pack::write_file;
use crate::presets::PACK_NAME;

/// Manifest schema version.
pub const CESP_VERSION: &str = "1.0";

/// Pack author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub github: String,
}

/// One sound entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Path relative to the pack directory.
    pub file: String,
    /// Human label.
    pub label: String,
    /// SHA-256 of the complete WAV file.
    pub sha256: String,
}

/// Sounds for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub sounds: Vec<SoundEntry>,
}

/// The full manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub cesp_version: String,
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub author: Author,
    pub license: String,
    pub language: String,
    pub categories: BTreeMap<String, Category>,
}

impl Manifest {
    /// Creates an empty gentle_pong manifest.
    pub fn new() -> Self {
        Self {
            cesp_version: CESP_VERSION.to_string(),
            name: PACK_NAME.to_string(),
            display_name: "Gentle Pong".to_string(),
            version: "1.0.0".to_string(),
            author: Author {
                name: "julvalen".to_string(),
                github: "julvalen".to_string(),
            },
            license: "MIT".to_string(),
            language: "en".to_string(),
            categories: BTreeMap::new(),
        }
    }

    /// Appends a sound to `category`, creating the category if needed.
    pub fn add_sound(&mut self, category: &str, entry: SoundEntry) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .sounds
            .push(entry);
    }

    /// Total number of sounds across categories.
    pub fn sound_count(&self) -> usize {
        self.categories.values().map(|c| c.sounds.len()).sum()
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }

    /// Writes the manifest to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        write_file(path, self.to_json_pretty()?.as_bytes())
    }

    /// Reads a manifest back from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 hex digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
