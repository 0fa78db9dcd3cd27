//! Packaging layout configuration.
//!
//! The layout is fixed by default: `manifest.json`, `icons/` and `src/` are
//! packaged into `dist/`, skipping icon sources and platform junk files. A
//! project may override any of these values with a `pack.toml` file at its
//! root. Omitted keys keep their defaults, so an empty file is equivalent to
//! no file at all.

use crate::error::{PackError, Result};
use camino::Utf8Path;
use serde::Deserialize;

/// Filename of the optional configuration file at the project root.
pub const CONFIG_FILENAME: &str = "pack.toml";

/// Default manifest document name.
pub const DEFAULT_MANIFEST: &str = "manifest.json";

/// Default archive filename prefix.
pub const DEFAULT_PREFIX: &str = "TikTok_Comment_Exporter";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Default include list, in packaging order.
pub const DEFAULT_INCLUDE: [&str; 3] = ["manifest.json", "icons/", "src/"];

/// Default exclusion patterns.
pub const DEFAULT_EXCLUDE: [&str; 4] = [".jpg", "__pycache__", ".DS_Store", "Thumbs.db"];

/// Layout settings for a packaging run.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    /// Manifest document name, relative to the project root.
    pub manifest: String,
    /// Root-relative files or directories eligible for packaging.
    pub include: Vec<String>,
    /// Substring patterns; a path containing any of them is dropped.
    pub exclude: Vec<String>,
    /// Archive filename prefix, followed by `_v<version>.zip`.
    pub prefix: String,
    /// Output directory, relative to the project root.
    pub output_dir: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_owned(),
            include: DEFAULT_INCLUDE.iter().map(|s| (*s).to_owned()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| (*s).to_owned()).collect(),
            prefix: DEFAULT_PREFIX.to_owned(),
            output_dir: DEFAULT_OUTPUT_DIR.to_owned(),
        }
    }
}

impl PackConfig {
    /// Load the configuration for the project rooted at `root`.
    ///
    /// Returns the defaults when `pack.toml` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Io`] if the file exists but cannot be read, or
    /// [`PackError::InvalidConfig`] if it is not valid TOML for this schema.
    pub fn load(root: &Utf8Path) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents).map_err(|e| PackError::InvalidConfig {
            path,
            reason: e.message().to_owned(),
        })
    }
}
