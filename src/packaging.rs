//! Archive creation for extension distribution.
//!
//! Loads the manifest version, prepares the output directory, collects the
//! filtered include list and writes it into a deflate-compressed zip archive
//! named `<prefix>_v<version>.zip`. Packaging is all-or-nothing: the first
//! error aborts the run.

use crate::collect::{ArchiveEntry, collect_entries};
use crate::config::PackConfig;
use crate::error::Result;
use crate::filter::ExclusionRules;
use crate::manifest::{ExtensionVersion, read_version};
use crate::naming::ArchiveName;
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::fs;
use std::io;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Permissions recorded for every archive entry.
const ENTRY_PERMISSIONS: u32 = 0o644;

/// What a packaging run would write, resolved without touching the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackPlan {
    /// Version read from the manifest.
    pub version: ExtensionVersion,
    /// Destination of the archive.
    pub archive_path: Utf8PathBuf,
    /// Files to write, in archive order.
    pub entries: Vec<ArchiveEntry>,
}

/// Outcome of a successful packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    /// Path to the created archive.
    pub archive_path: Utf8PathBuf,
    /// Number of files written into the archive.
    pub file_count: usize,
    /// Size of the archive on disk, in bytes.
    pub archive_size: u64,
}

/// Resolve the version, archive path and entry list for `root` without
/// creating anything.
///
/// # Errors
///
/// Returns [`crate::error::PackError::ManifestNotFound`] if the manifest is
/// absent, or an I/O error if the include list cannot be walked.
pub fn plan(root: &Utf8Path, config: &PackConfig) -> Result<PackPlan> {
    let version = read_version(&root.join(&config.manifest))?;
    build_plan(root, config, version)
}

/// Package the extension rooted at `root`.
///
/// # Errors
///
/// Returns [`crate::error::PackError::ManifestNotFound`] before any output is
/// created if the manifest is absent. Any I/O or archive failure afterwards
/// is returned as-is; a partially written archive is not cleaned up.
pub fn pack(root: &Utf8Path, config: &PackConfig) -> Result<PackReport> {
    let version = read_version(&root.join(&config.manifest))?;

    let output_dir = root.join(&config.output_dir);
    fs::create_dir_all(&output_dir)?;

    let plan = build_plan(root, config, version)?;
    write_archive(&plan.archive_path, &plan.entries)?;

    let archive_size = fs::metadata(&plan.archive_path)?.len();
    Ok(PackReport {
        archive_path: plan.archive_path,
        file_count: plan.entries.len(),
        archive_size,
    })
}

fn build_plan(root: &Utf8Path, config: &PackConfig, version: ExtensionVersion) -> Result<PackPlan> {
    let name = ArchiveName::new(config.prefix.as_str(), version.clone());
    let archive_path = root.join(&config.output_dir).join(name.filename());

    let rules = ExclusionRules::new(config.exclude.iter().map(String::as_str));
    let mut entries = collect_entries(root, &config.include, &rules)?;
    // A previous archive can sit under an included directory.
    entries.retain(|entry| entry.source != archive_path);

    Ok(PackPlan {
        version,
        archive_path,
        entries,
    })
}

/// Create a zip archive at `output_path`, replacing any existing file.
///
/// Entries are deflate-compressed and stamped with the zip epoch and fixed
/// permissions, so unchanged inputs yield byte-identical archives.
///
/// # Errors
///
/// Returns an I/O or archive error if a source file cannot be read or the
/// archive cannot be written.
pub fn write_archive(output_path: &Utf8Path, entries: &[ArchiveEntry]) -> Result<()> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_PERMISSIONS);

    let mut writer = ZipWriter::new(fs::File::create(output_path)?);
    for entry in entries {
        debug!("adding {} from {}", entry.name, entry.source);
        writer.start_file(entry.name.as_str(), options)?;
        let mut source = fs::File::open(&entry.source)?;
        io::copy(&mut source, &mut writer)?;
    }
    writer.finish()?;
    Ok(())
}

/// List the entry names of the archive at `path`, in archive order.
///
/// # Errors
///
/// Returns an I/O or archive error if the file cannot be opened or is not a
/// zip archive.
pub fn archive_entry_names(path: &Utf8Path) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(fs::File::open(path)?)?;
    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        names.push(archive.by_index(index)?.name().to_owned());
    }
    Ok(names)
}

#[cfg(test)]
#[path = "packaging_tests.rs"]
mod tests;
