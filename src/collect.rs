//! Candidate enumeration for the archive.
//!
//! Include-list entries are resolved against the project root in list order.
//! Files are taken as-is, directories are walked recursively and their files
//! sorted by path, and anything else is skipped without error.

use crate::error::Result;
use crate::filter::ExclusionRules;
use camino::{Utf8Path, Utf8PathBuf};
use log::trace;

/// One file to be written into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Location of the file on disk.
    pub source: Utf8PathBuf,
    /// Root-relative name inside the archive, `/`-separated.
    pub name: String,
}

/// Resolve `include` against `root` and return the non-excluded files in
/// archive order.
///
/// # Errors
///
/// Returns an I/O error if a directory cannot be read or contains a name
/// that is not valid UTF-8.
pub fn collect_entries(
    root: &Utf8Path,
    include: &[String],
    rules: &ExclusionRules,
) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();

    for item in include {
        let full_path = root.join(item);
        if full_path.is_file() {
            push_unless_excluded(root, full_path, rules, &mut entries);
        } else if full_path.is_dir() {
            for file in walk_files_sorted(&full_path)? {
                push_unless_excluded(root, file, rules, &mut entries);
            }
        } else {
            trace!("skipping {item}: neither a file nor a directory");
        }
    }

    Ok(entries)
}

fn push_unless_excluded(
    root: &Utf8Path,
    source: Utf8PathBuf,
    rules: &ExclusionRules,
    entries: &mut Vec<ArchiveEntry>,
) {
    let name = archive_name(root, &source);
    if let Some(pattern) = rules.matching_pattern(&name) {
        trace!("excluding {name} (matches {pattern:?})");
        return;
    }
    entries.push(ArchiveEntry { source, name });
}

/// Compute the `/`-separated name of `path` relative to `root`.
///
/// Paths outside `root` keep their full rendering with `/` separators.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use extension_packager::collect::archive_name;
///
/// let root = Utf8Path::new("/work/ext");
/// let file = Utf8Path::new("/work/ext/src/popup/popup.js");
/// assert_eq!(archive_name(root, file), "src/popup/popup.js");
/// ```
#[must_use]
pub fn archive_name(root: &Utf8Path, path: &Utf8Path) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return path.as_str().replace('\\', "/");
    };
    relative
        .components()
        .map(|c| c.as_str())
        .filter(|c| !c.is_empty() && *c != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Return every regular file beneath `dir`, sorted component-wise.
///
/// Symbolic links to directories are not descended into.
fn walk_files_sorted(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_owned()];

    while let Some(current) = pending.pop() {
        for entry in current.read_dir_utf8()? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                pending.push(path.to_owned());
            } else if path.is_file() {
                files.push(path.to_owned());
            }
        }
    }

    files.sort();
    Ok(files)
}
