//! Extension packager CLI entrypoint.
//!
//! Packages the extension at the project root into
//! `dist/<prefix>_v<version>.zip` and reports the file count and archive
//! size. Exits with status 1 on any failure.

use camino::Utf8PathBuf;
use clap::Parser;
use extension_packager::cli::Cli;
use extension_packager::config::PackConfig;
use extension_packager::error::{PackError, Result};
use extension_packager::output::{dry_run_text, packed_message, size_message};
use extension_packager::packaging::{pack, plan};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let root = resolve_root(cli.root.clone())?;
    let config = PackConfig::load(&root)?;

    if cli.dry_run {
        let plan = plan(&root, &config)?;
        write_line(stdout, dry_run_text(&plan).trim_end());
        return Ok(());
    }

    let report = pack(&root, &config)?;
    write_line(stdout, packed_message(&report));
    write_line(stdout, size_message(&report));
    Ok(())
}

/// Uses the `--root` override or falls back to the current directory.
fn resolve_root(cli_root: Option<Utf8PathBuf>) -> Result<Utf8PathBuf> {
    match cli_root {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir()?;
            Utf8PathBuf::try_from(cwd).map_err(|e| PackError::NonUtf8Path {
                path: e.into_path_buf().display().to_string(),
            })
        }
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, format!("error: {err}"));
            1
        }
    }
}

fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort output; ignore write failures.
    }
}
