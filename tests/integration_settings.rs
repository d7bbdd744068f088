//! Integration tests for Settings save/load functionality
//!
//! These tests verify that Settings can be serialized to JSON, saved to disk,
//! and deserialized back with full fidelity, using temporary directories for
//! isolation.

use std::path::PathBuf;

use tempfile::TempDir;

use iconsmith::iconsmith::Rgb;
use iconsmith::iconsmith::settings::{PngTarget, Settings};

/// Create a Settings instance with non-default values in every field
fn create_custom_settings() -> Settings {
    let mut settings = Settings::new();
    settings.color = Rgb::new(12, 200, 150);
    settings.source_dir = Some(PathBuf::from("/path/to/rendered"));
    settings.out_dir = PathBuf::from("/path/to/output");
    settings.png_targets = vec![
        PngTarget::new(64, "64x64.png"),
        PngTarget::new(512, "512x512.png"),
    ];
    settings.ico_sizes = vec![16, 24, 32];
    settings
}

#[test]
fn test_settings_save_load_round_trip() {
    let tmp = TempDir::new().expect("temp dir should be creatable");
    let path = tmp.path().join("iconsmith.json");

    let original = create_custom_settings();
    original.save(&path).expect("settings should save");
    let loaded = Settings::load(&path).expect("settings should load");

    assert_eq!(loaded.color, original.color, "color should round-trip");
    assert_eq!(
        loaded.source_dir, original.source_dir,
        "source directory should round-trip"
    );
    assert_eq!(
        loaded.out_dir, original.out_dir,
        "output directory should round-trip"
    );
    assert_eq!(
        loaded.png_targets.len(),
        original.png_targets.len(),
        "PNG target count should round-trip"
    );
    for (loaded, original) in loaded.png_targets.iter().zip(&original.png_targets) {
        assert_eq!(loaded.size, original.size, "target size should round-trip");
        assert_eq!(
            loaded.file_name, original.file_name,
            "target file name should round-trip"
        );
    }
    assert_eq!(
        loaded.ico_sizes, original.ico_sizes,
        "ICO ladder should round-trip"
    );
}

#[test]
fn test_default_settings_omit_source_dir() {
    let tmp = TempDir::new().expect("temp dir should be creatable");
    let path = tmp.path().join("iconsmith.json");

    Settings::new().save(&path).expect("settings should save");
    let content = std::fs::read_to_string(&path).expect("file should exist");
    assert!(
        !content.contains("source_dir"),
        "an unset source directory should not be serialized"
    );

    let loaded = Settings::load(&path).expect("settings should load");
    assert!(loaded.source_dir.is_none(), "source directory stays unset");
}

#[test]
fn test_load_rejects_malformed_json() {
    let tmp = TempDir::new().expect("temp dir should be creatable");
    let path = tmp.path().join("iconsmith.json");
    std::fs::write(&path, "{ not json").expect("file should be writable");

    let error = Settings::load(&path).expect_err("malformed JSON should fail");
    assert!(
        error.to_string().contains("Failed to parse"),
        "error should say the file failed to parse, got: {}",
        error
    );
}
