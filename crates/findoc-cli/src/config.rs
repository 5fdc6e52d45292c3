//! Generator settings
//!
//! Read from `findoc.toml` in the working directory, or from the file given
//! with `--config`. Every table and field is optional.
//!
//! ```toml
//! [output]
//! dir = "dist"
//!
//! [metadata]
//! creator = "Equipe FinApp"
//!
//! [theme.palette]
//! emerald_600 = "#047857"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use findoc_core::{Metadata, Theme};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the settings file picked up from the working directory
pub const CONFIG_FILE: &str = "findoc.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Where the documents are written
    pub output: OutputSettings,
    /// Package properties stamped into both documents
    pub metadata: Metadata,
    /// Colors, fonts and text profiles
    pub theme: Theme,
}

/// Output locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: PathBuf,
    /// File name of the user manual
    pub manual: String,
    /// File name of the pitch deck
    pub pitch: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            manual: "FinApp - Manual do Usuario.docx".to_string(),
            pitch: "FinApp - Pitch Deck.pptx".to_string(),
        }
    }
}

impl OutputSettings {
    pub fn manual_path(&self) -> PathBuf {
        self.dir.join(&self.manual)
    }

    pub fn pitch_path(&self) -> PathBuf {
        self.dir.join(&self.pitch)
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> findoc_core::Result<Self> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.theme.validate()?;
        settings.metadata.validate()?;
        Ok(settings)
    }

    /// Load `explicit` if given, else `findoc.toml` inside `search_dir`,
    /// else the defaults
    pub fn load(explicit: Option<&Path>, search_dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = search_dir.join(CONFIG_FILE);
                if !candidate.is_file() {
                    debug!("No {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), "Settings loaded");
        Ok(settings)
    }
}
