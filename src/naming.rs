//! Archive naming policy.
//!
//! Archive names are deterministic: `<prefix>_v<version>.zip`. Re-running
//! with an unchanged version targets the same file.

use crate::manifest::ExtensionVersion;
use std::fmt;

/// The fixed file extension for extension archives.
const ARCHIVE_EXTENSION: &str = ".zip";

/// A fully-qualified archive filename.
///
/// # Examples
///
/// ```
/// use extension_packager::manifest::ExtensionVersion;
/// use extension_packager::naming::ArchiveName;
///
/// let name = ArchiveName::new("TikTok_Comment_Exporter", ExtensionVersion::new("1.2.3"));
/// assert_eq!(name.to_string(), "TikTok_Comment_Exporter_v1.2.3.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    prefix: String,
    version: ExtensionVersion,
}

impl ArchiveName {
    /// Create an archive name from a prefix and version.
    #[must_use]
    pub fn new(prefix: impl Into<String>, version: ExtensionVersion) -> Self {
        Self {
            prefix: prefix.into(),
            version,
        }
    }

    /// Return the version component.
    #[must_use]
    pub fn version(&self) -> &ExtensionVersion {
        &self.version
    }

    /// Return the filename as a string without consuming the value.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_v{}{ARCHIVE_EXTENSION}", self.prefix, self.version)
    }
}
