//! CLI argument definitions for the extension packager.
//!
//! Every argument is optional: running the binary bare packages the current
//! directory with the default layout.

use camino::Utf8PathBuf;
use clap::Parser;

/// Package a browser extension into a versioned zip archive.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "extension-packager")]
#[command(version, about)]
#[command(long_about = concat!(
    "Package a browser extension into a versioned zip archive.\n\n",
    "Reads the version from manifest.json, collects manifest.json, icons/ and ",
    "src/, drops icon sources and platform junk files, and writes ",
    "dist/TikTok_Comment_Exporter_v<version>.zip.\n\n",
    "A pack.toml file at the project root may override the include list, ",
    "exclusion patterns, archive prefix and output directory.",
))]
pub struct Cli {
    /// Project root containing the manifest [default: current directory].
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<Utf8PathBuf>,

    /// Show the archive path and file list without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}
