//! Unit tests for the packaging module.

use super::*;
use crate::error::PackError;
use rstest::{fixture, rstest};
use std::io::Read;
use tempfile::TempDir;

struct Project {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Project {
    fn write(&self, relative: &str, contents: &str) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(&path, contents).expect("write");
    }

    fn dist(&self) -> Utf8PathBuf {
        self.root.join("dist")
    }
}

#[fixture]
fn project() -> Project {
    let dir = TempDir::new().expect("temp dir creation succeeds");
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("utf8 temp dir");
    Project { _dir: dir, root }
}

#[fixture]
fn extension(project: Project) -> Project {
    project.write("manifest.json", r#"{"manifest_version": 3, "version": "1.2.3"}"#);
    project.write("icons/icon16.png", "png16");
    project.write("icons/icon-source.jpg", "raw icon");
    project.write("src/background/service-worker.js", "worker");
    project.write("src/popup/popup.js", "popup");
    project.write("src/.DS_Store", "junk");
    project.write("README.md", "not included");
    project
}

#[rstest]
fn pack_writes_versioned_archive(extension: Project) {
    let report = pack(&extension.root, &PackConfig::default()).expect("packaging succeeds");

    assert_eq!(
        report.archive_path,
        extension.dist().join("TikTok_Comment_Exporter_v1.2.3.zip")
    );
    assert!(report.archive_path.is_file());
    assert_eq!(
        report.archive_size,
        fs::metadata(&report.archive_path).expect("stat").len()
    );
}

#[rstest]
fn pack_filters_and_orders_entries(extension: Project) {
    let report = pack(&extension.root, &PackConfig::default()).expect("packaging succeeds");

    let names = archive_entry_names(&report.archive_path).expect("readable archive");
    assert_eq!(
        names,
        vec![
            "manifest.json",
            "icons/icon16.png",
            "src/background/service-worker.js",
            "src/popup/popup.js",
        ]
    );
    assert_eq!(report.file_count, names.len());
}

#[rstest]
fn pack_defaults_missing_version(project: Project) {
    project.write("manifest.json", r#"{"name": "Exporter"}"#);

    let report = pack(&project.root, &PackConfig::default()).expect("packaging succeeds");
    assert_eq!(
        report.archive_path.file_name(),
        Some("TikTok_Comment_Exporter_v0.0.0.zip")
    );
    assert_eq!(report.file_count, 1);
}

#[rstest]
fn pack_without_manifest_creates_nothing(project: Project) {
    project.write("src/app.js", "app");

    let err = pack(&project.root, &PackConfig::default()).expect_err("manifest is required");
    assert!(matches!(err, PackError::ManifestNotFound { .. }));
    assert!(!project.dist().exists(), "output directory must not be created");
}

#[rstest]
fn pack_reuses_existing_output_dir_and_overwrites(extension: Project) {
    fs::create_dir_all(extension.dist()).expect("mkdir dist");
    let first = pack(&extension.root, &PackConfig::default()).expect("first run");

    extension.write("src/popup/popup.js", "popup v2");
    let second = pack(&extension.root, &PackConfig::default()).expect("second run");

    assert_eq!(first.archive_path, second.archive_path);
    let mut archive =
        ZipArchive::new(fs::File::open(&second.archive_path).expect("open")).expect("zip");
    let mut contents = String::new();
    archive
        .by_name("src/popup/popup.js")
        .expect("entry present")
        .read_to_string(&mut contents)
        .expect("read entry");
    assert_eq!(contents, "popup v2");
}

#[rstest]
fn repeated_runs_are_byte_identical(extension: Project) {
    let first = pack(&extension.root, &PackConfig::default()).expect("first run");
    let first_bytes = fs::read(&first.archive_path).expect("read first");

    let second = pack(&extension.root, &PackConfig::default()).expect("second run");
    let second_bytes = fs::read(&second.archive_path).expect("read second");

    assert_eq!(first_bytes, second_bytes);
}

#[rstest]
fn entries_are_deflated(extension: Project) {
    let report = pack(&extension.root, &PackConfig::default()).expect("packaging succeeds");

    let mut archive =
        ZipArchive::new(fs::File::open(&report.archive_path).expect("open")).expect("zip");
    let entry = archive.by_name("manifest.json").expect("manifest entry");
    assert_eq!(entry.compression(), CompressionMethod::Deflated);
}

#[rstest]
fn plan_has_no_side_effects(extension: Project) {
    let plan = plan(&extension.root, &PackConfig::default()).expect("plan succeeds");

    assert_eq!(plan.version.as_str(), "1.2.3");
    assert_eq!(plan.entries.len(), 4);
    assert!(!extension.dist().exists());
}

#[rstest]
fn archive_inside_included_directory_is_not_repacked(project: Project) {
    project.write("manifest.json", r#"{"version": "1.0.0"}"#);
    project.write("src/app.js", "app");
    let config = PackConfig {
        output_dir: "src/dist".to_owned(),
        ..PackConfig::default()
    };

    pack(&project.root, &config).expect("first run");
    let report = pack(&project.root, &config).expect("second run");

    let names = archive_entry_names(&report.archive_path).expect("readable archive");
    assert_eq!(names, vec!["manifest.json", "src/app.js"]);
}

#[rstest]
fn write_archive_accepts_empty_entry_list(project: Project) {
    let path = project.root.join("empty.zip");
    write_archive(&path, &[]).expect("empty archive");
    assert!(archive_entry_names(&path).expect("readable").is_empty());
}

#[rstest]
fn write_archive_fails_on_unreadable_source(project: Project) {
    let path = project.root.join("broken.zip");
    let entries = [ArchiveEntry {
        source: project.root.join("missing.js"),
        name: "missing.js".to_owned(),
    }];

    let err = write_archive(&path, &entries).expect_err("source is missing");
    assert!(matches!(err, PackError::Io(_)));
}
