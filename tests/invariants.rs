//! Contract Invariant Tests
//!
//! These tests verify the guarantees of a run against a real filesystem.

use std::fs;
use std::path::Path;

use tron_vanity_logos::{
    AssetKind, Emitter, ReportFormat,
    generate_banner, generate_favicon, generate_icon, generate_logo,
};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

fn emit_into(dir: &Path) -> String {
    let mut out = Vec::new();
    Emitter::new(dir)
        .emit_all(&mut out, ReportFormat::Human)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn invariant_producers_deterministic() {
    assert_eq!(generate_logo(), generate_logo());
    assert_eq!(generate_icon(), generate_icon());
    assert_eq!(generate_banner(), generate_banner());
    assert_eq!(generate_favicon(), generate_favicon());
}

#[test]
fn invariant_exactly_four_files_with_xml_declaration() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("assets/logos");
    emit_into(&out_dir);

    let mut names: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["banner.svg", "favicon.svg", "icon.svg", "logo.svg"]);

    for kind in AssetKind::ALL {
        let content = fs::read_to_string(out_dir.join(kind.file_name())).unwrap();
        assert!(!content.is_empty());
        assert!(content.starts_with(XML_DECL), "{:?}", kind);
        assert_eq!(content, kind.render());
    }
}

#[test]
fn invariant_stale_files_fully_overwritten() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("assets/logos");
    fs::create_dir_all(&out_dir).unwrap();

    // Longer than any template so leftover bytes would show.
    let stale = "x".repeat(generate_banner().len() * 2);
    for kind in AssetKind::ALL {
        fs::write(out_dir.join(kind.file_name()), &stale).unwrap();
    }

    emit_into(&out_dir);

    for kind in AssetKind::ALL {
        let content = fs::read(out_dir.join(kind.file_name())).unwrap();
        assert_eq!(content, kind.render().as_bytes(), "{:?}", kind);
    }
}

#[test]
fn invariant_missing_ancestors_created() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("deep/nested/tree/assets/logos");
    assert!(!tmp.path().join("deep").exists());

    emit_into(&out_dir);

    assert!(out_dir.join("favicon.svg").is_file());
}

#[test]
fn invariant_failed_directory_claims_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file where a directory is needed makes create_dir_all fail,
    // even when running as root.
    fs::write(tmp.path().join("assets"), "not a directory").unwrap();

    let mut out = Vec::new();
    let err = Emitter::new(tmp.path().join("assets/logos"))
        .emit_all(&mut out, ReportFormat::Human)
        .unwrap_err();

    assert!(err.is_filesystem());
    assert!(err.to_string().contains("Failed to create output directory"));
    let report = String::from_utf8(out).unwrap();
    assert!(!report.contains('✓'));
    assert!(!report.contains("All logo files generated"));
}

#[test]
fn invariant_failed_write_stops_run() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("logos");
    // A directory squatting on icon.svg makes that write fail.
    fs::create_dir_all(out_dir.join("icon.svg")).unwrap();

    let mut out = Vec::new();
    let err = Emitter::new(&out_dir)
        .emit_all(&mut out, ReportFormat::Human)
        .unwrap_err();
    assert!(err.is_filesystem());
    assert!(err.to_string().contains("icon.svg"));

    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("✓ Primary logo generated"));
    assert!(!report.contains("✓ App icon generated"));
    assert!(!report.contains("All logo files generated"));

    // Earlier files stay, later ones never appear.
    assert_eq!(fs::read_to_string(out_dir.join("logo.svg")).unwrap(), generate_logo());
    assert!(!out_dir.join("banner.svg").exists());
    assert!(!out_dir.join("favicon.svg").exists());
}

#[test]
fn invariant_marker_substrings_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("work/assets/logos");
    emit_into(&out_dir);

    let read = |name: &str| fs::read_to_string(out_dir.join(name)).unwrap();
    assert!(read("logo.svg").contains("TRON VANITY"));
    assert!(read("icon.svg").contains("iconGrad1"));
    assert!(read("banner.svg").contains("Professional TRON Address Generator"));
    assert!(read("favicon.svg").contains("faviconGrad1"));
}

#[test]
fn invariant_report_order_and_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let report = emit_into(&tmp.path().join("logos"));

    let positions: Vec<_> = ["✓ Primary logo", "✓ App icon", "✓ Banner", "✓ Favicon", "🎨 Color palette"]
        .iter()
        .map(|needle| report.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(report.contains("#ff6b35"));
    assert!(report.contains("💡 Suggested usage:"));
}

#[test]
fn invariant_manifest_hash_stable_across_runs() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    let m1 = Emitter::new(a.path()).emit_all(&mut Vec::<u8>::new(), ReportFormat::Human).unwrap();
    let m2 = Emitter::new(b.path()).emit_all(&mut Vec::<u8>::new(), ReportFormat::Human).unwrap();

    assert_eq!(m1.manifest_hash, m2.manifest_hash);
    assert_eq!(m1.assets.len(), 4);
    for (x, y) in m1.assets.iter().zip(&m2.assets) {
        assert_eq!(x.sha256, y.sha256);
        assert_eq!(x.bytes, y.bytes);
    }
}

#[test]
fn invariant_json_report_is_manifest() {
    let tmp = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let manifest = Emitter::new(tmp.path())
        .emit_all(&mut out, ReportFormat::Json)
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["manifest_hash"], manifest.manifest_hash.as_str());
    assert_eq!(value["assets"][3]["kind"], "favicon");
    assert_eq!(value["assets"][0]["file_name"], "logo.svg");
    assert_eq!(value["engine_version"], tron_vanity_logos::ENGINE_VERSION);
}
