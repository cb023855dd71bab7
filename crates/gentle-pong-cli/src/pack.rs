//! On-disk layout of an installed pack.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::presets::PACK_NAME;

/// Install root relative to the home directory.
pub const DEFAULT_ROOT: &str = ".claude/hooks/peon-ping";

/// Manifest file name inside the pack directory.
pub const MANIFEST_FILE: &str = "openpeon.json";

/// Bluetooth pre-roll file name inside the install root.
pub const SILENCE_FILE: &str = ".silence.wav";

/// Resolved paths for one install root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackLayout {
    /// Install root, e.g. `~/.claude/hooks/peon-ping`.
    pub root: PathBuf,
    /// `<root>/packs/<pack>`.
    pub pack_dir: PathBuf,
    /// `<pack_dir>/sounds`.
    pub sounds_dir: PathBuf,
    /// `<pack_dir>/openpeon.json`.
    pub manifest_path: PathBuf,
    /// `<root>/.silence.wav`.
    pub silence_path: PathBuf,
}

impl PackLayout {
    /// Lays out the pack under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let pack_dir = root.join("packs").join(PACK_NAME);
        Self {
            sounds_dir: pack_dir.join("sounds"),
            manifest_path: pack_dir.join(MANIFEST_FILE),
            silence_path: root.join(SILENCE_FILE),
            pack_dir,
            root,
        }
    }

    /// Uses `root` if given, otherwise the default under the home directory.
    pub fn resolve(root: Option<&str>) -> Result<Self> {
        match root {
            Some(root) => Ok(Self::new(root)),
            None => default_root().map(Self::new),
        }
    }

    /// Path of a sound file inside the pack.
    pub fn sound_path(&self, file: &str) -> PathBuf {
        self.sounds_dir.join(file)
    }

    /// Manifest-relative path of a sound file.
    pub fn manifest_entry(file: &str) -> String {
        format!("sounds/{}", file)
    }

    /// Creates the sounds directory and every parent.
    pub fn create_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.sounds_dir).with_context(|| {
            format!(
                "Failed to create sounds directory: {}",
                self.sounds_dir.display()
            )
        })
    }
}

/// Default install root: `~/.claude/hooks/peon-ping`.
pub fn default_root() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DEFAULT_ROOT))
}

/// Writes `bytes` to `path`, naming the file on failure.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
