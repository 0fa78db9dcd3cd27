//! Error types for the extension packager.
//!
//! A missing manifest is the only precondition failure; everything else is an
//! unrecovered I/O or archive error that aborts the run.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while packaging an extension.
#[derive(Debug, Error)]
pub enum PackError {
    /// The manifest document was not found at the project root.
    #[error("{filename} not found at {path}")]
    ManifestNotFound {
        /// Bare filename of the manifest, used in the diagnostic.
        filename: String,
        /// Path where the manifest was expected.
        path: Utf8PathBuf,
    },

    /// The manifest exists but is not a JSON document.
    #[error("invalid manifest at {path}: {source}")]
    InvalidManifest {
        /// Path to the rejected manifest.
        path: Utf8PathBuf,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The packaging configuration file could not be parsed.
    #[error("invalid packaging configuration at {path}: {reason}")]
    InvalidConfig {
        /// Path to the rejected configuration file.
        path: Utf8PathBuf,
        /// Description of the parse error.
        reason: String,
    },

    /// A path encountered while walking the project is not valid UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing or reading the zip container failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Result type alias using [`PackError`].
pub type Result<T> = std::result::Result<T, PackError>;
