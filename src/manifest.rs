//! Extension manifest loading.
//!
//! Only the `version` field of the manifest is consumed. It is not validated
//! as semver: whatever string the manifest carries ends up in the archive
//! name.

use crate::error::{PackError, Result};
use camino::Utf8Path;
use log::warn;
use serde_json::Value;
use std::fmt;

/// Version used when the manifest has no usable `version` field.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// The version string read from an extension manifest.
///
/// # Examples
///
/// ```
/// use extension_packager::manifest::ExtensionVersion;
///
/// let version = ExtensionVersion::from_manifest_json(r#"{"version": "1.2.3"}"#)
///     .expect("valid JSON");
/// assert_eq!(version.as_str(), "1.2.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionVersion(String);

impl ExtensionVersion {
    /// Wrap an explicit version string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the version from a manifest document's JSON text.
    ///
    /// A string value is used verbatim and a number keeps its JSON rendering.
    /// A missing key, or a value of any other type, falls back to
    /// [`DEFAULT_VERSION`].
    ///
    /// # Errors
    ///
    /// Returns the parse error if `json` is not a JSON document.
    pub fn from_manifest_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_str(json)?;
        Ok(Self::from_document(&document))
    }

    fn from_document(document: &Value) -> Self {
        match document.get("version") {
            Some(Value::String(version)) => Self(version.clone()),
            Some(Value::Number(version)) => Self(version.to_string()),
            Some(other) => {
                warn!("manifest version {other} is not a string; using {DEFAULT_VERSION}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl Default for ExtensionVersion {
    fn default() -> Self {
        Self(DEFAULT_VERSION.to_owned())
    }
}

impl fmt::Display for ExtensionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the manifest at `path` and return its version.
///
/// # Errors
///
/// Returns [`PackError::ManifestNotFound`] if no file exists at `path`,
/// [`PackError::Io`] if it cannot be read, or [`PackError::InvalidManifest`]
/// if it is not JSON.
pub fn read_version(path: &Utf8Path) -> Result<ExtensionVersion> {
    if !path.is_file() {
        return Err(PackError::ManifestNotFound {
            filename: path.file_name().unwrap_or(path.as_str()).to_owned(),
            path: path.to_owned(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    ExtensionVersion::from_manifest_json(&contents).map_err(|source| {
        PackError::InvalidManifest {
            path: path.to_owned(),
            source,
        }
    })
}
