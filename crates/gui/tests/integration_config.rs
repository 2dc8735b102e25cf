//! Integration tests for loading box configuration files.

use std::io::Write;

use box_recommender_gui_lib::harness::TestHarness;
use box_recommender_gui_lib::state::NotificationLevel;
use shared::Fit;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_config_applies_box() {
    let mut h = TestHarness::new();
    let file = config_file(r#"{"box_dimensions": {"length": 10, "width": 20, "height": 30}}"#);

    assert!(h.load_config_file(file.path()));
    assert_eq!(h.box_dimensions().extents(), [10.0, 20.0, 30.0]);

    let n = h.last_notification().unwrap();
    assert_eq!(n.level, NotificationLevel::Info);
    assert_eq!(n.message, "Box configuration loaded successfully.");
}

#[test]
fn test_load_config_reclassifies_stencils() {
    let mut h = TestHarness::new();
    let id = h.add_stencil_at([0.0, 0.0, 0.0], [15.0, 15.0, 15.0]);
    assert_eq!(h.fit_of(&id), Some(Fit::Fits));

    let file = config_file(r#"{"box_dimensions": {"length": 10, "width": 20, "height": 30}}"#);
    assert!(h.load_config_file(file.path()));
    assert_eq!(h.fit_of(&id), Some(Fit::Exceeds));
}

#[test]
fn test_load_config_ignores_unknown_keys() {
    let mut h = TestHarness::new();
    let file = config_file(
        r#"{"name": "crate", "box_dimensions": {"length": 1.5, "width": 2, "height": 3, "unit": "cm"}}"#,
    );
    assert!(h.load_config_file(file.path()));
    assert_eq!(h.box_dimensions().extents(), [1.5, 2.0, 3.0]);
}

#[test]
fn test_load_config_without_box_key_keeps_box() {
    let mut h = TestHarness::new();
    let before = h.box_dimensions();
    let file = config_file(r#"{"stencils": []}"#);

    assert!(h.load_config_file(file.path()));
    assert_eq!(h.box_dimensions(), before);
    assert_eq!(
        h.last_notification().unwrap().level,
        NotificationLevel::Info
    );
}

#[test]
fn test_load_config_missing_file_reports_error() {
    let mut h = TestHarness::new();
    let before = h.box_dimensions();
    let dir = tempfile::tempdir().unwrap();

    assert!(!h.load_config_file(&dir.path().join("absent.json")));
    assert_eq!(h.box_dimensions(), before);

    let n = h.last_notification().unwrap();
    assert_eq!(n.level, NotificationLevel::Error);
    assert!(n.message.starts_with("Failed to load box configuration"));
}

#[test]
fn test_load_config_malformed_json_keeps_box() {
    let mut h = TestHarness::new();
    let before = h.box_dimensions();
    let file = config_file(r#"{"box_dimensions": {"length": 10,"#);

    assert!(!h.load_config_file(file.path()));
    assert_eq!(h.box_dimensions(), before);
    assert_eq!(
        h.last_notification().unwrap().level,
        NotificationLevel::Error
    );
}

#[test]
fn test_load_config_partial_or_invalid_dimensions_rejected() {
    let mut h = TestHarness::new();
    let before = h.box_dimensions();

    for bad in [
        r#"{"box_dimensions": {"length": 10, "width": 20}}"#,
        r#"{"box_dimensions": {"length": "ten", "width": 20, "height": 30}}"#,
        r#"{"box_dimensions": {"length": 10, "width": 0, "height": 30}}"#,
        r#"{"box_dimensions": {"length": 10, "width": 20, "height": -5}}"#,
        r#"{"box_dimensions": {"length": 1e39, "width": 20, "height": 30}}"#,
    ] {
        let file = config_file(bad);
        assert!(!h.load_config_file(file.path()), "accepted: {bad}");
        assert_eq!(h.box_dimensions(), before, "box changed by: {bad}");
    }
}

#[test]
fn test_load_config_json_text() {
    let mut h = TestHarness::new();
    assert!(h.load_config_json(r#"{"box_dimensions": {"length": 4, "width": 5, "height": 6}}"#));
    assert_eq!(h.box_dimensions().extents(), [4.0, 5.0, 6.0]);
    assert!(!h.load_config_json("not json"));
}
