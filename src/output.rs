//! Output formatting for the packager CLI.
//!
//! A successful run prints two lines: the file count with the archive
//! destination, and the archive size in kibibytes to one decimal place.

use crate::packaging::{PackPlan, PackReport};

/// Bytes per kibibyte.
const KIB: u64 = 1024;

/// Format the count-and-destination line.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use extension_packager::output::packed_message;
/// use extension_packager::packaging::PackReport;
///
/// let report = PackReport {
///     archive_path: Utf8PathBuf::from("dist/Ext_v1.0.0.zip"),
///     file_count: 12,
///     archive_size: 2048,
/// };
/// assert_eq!(packed_message(&report), "Packed 12 files -> dist/Ext_v1.0.0.zip");
/// ```
#[must_use]
pub fn packed_message(report: &PackReport) -> String {
    format!(
        "Packed {} files -> {}",
        report.file_count, report.archive_path
    )
}

/// Format the archive size line.
#[must_use]
pub fn size_message(report: &PackReport) -> String {
    format!("Size: {} KB", format_kib(report.archive_size))
}

/// Render `bytes` as kibibytes with one decimal place.
///
/// Ties on the hundredths digit round to the even tenth, so 256 bytes
/// (exactly 0.25 KiB) renders as `0.2`.
///
/// # Examples
///
/// ```
/// use extension_packager::output::format_kib;
///
/// assert_eq!(format_kib(0), "0.0");
/// assert_eq!(format_kib(1536), "1.5");
/// assert_eq!(format_kib(256), "0.2");
/// ```
#[must_use]
pub fn format_kib(bytes: u64) -> String {
    let scaled = u128::from(bytes) * 10;
    let divisor = u128::from(KIB);
    let mut tenths = scaled.div_euclid(divisor);
    let remainder = scaled.rem_euclid(divisor);
    let half = divisor.div_euclid(2);
    if remainder > half || (remainder == half && tenths.rem_euclid(2) == 1) {
        tenths += 1;
    }
    format!("{}.{}", tenths.div_euclid(10), tenths.rem_euclid(10))
}

/// Format the dry-run listing for a plan.
#[must_use]
pub fn dry_run_text(plan: &PackPlan) -> String {
    let mut text = format!(
        concat!(
            "Dry run - no files will be written\n\n",
            "Version: {}\n",
            "Archive: {}\n",
            "Files ({}):\n"
        ),
        plan.version,
        plan.archive_path,
        plan.entries.len()
    );
    for entry in &plan.entries {
        text.push_str(&format!("  {}\n", entry.name));
    }
    text
}
