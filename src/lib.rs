//! Extension packager library.
//!
//! Packages a browser extension's distributable files (manifest, icons and
//! scripts) into a versioned, deflate-compressed zip archive. It is used by
//! the `extension-packager` binary and can be driven programmatically for
//! tests.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`collect`] - Include-list resolution and sorted directory walking
//! - [`config`] - Packaging layout defaults and `pack.toml` overrides
//! - [`error`] - Error types
//! - [`filter`] - Substring exclusion rules
//! - [`manifest`] - Manifest loading and version extraction
//! - [`naming`] - Archive filename policy
//! - [`output`] - Summary and dry-run formatting
//! - [`packaging`] - Archive creation

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod filter;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod packaging;
