//! Tests for loading the play configuration.

use std::io::Write;
use strictly_minimax::PlayConfig;

#[test]
fn test_defaults_without_file() {
    let config = PlayConfig::load(None).unwrap();
    assert_eq!(config.log_filter(), "warn");
    assert!(!*config.show_engine_score());
    assert!(!*config.show_search_stats());
}

#[test]
fn test_missing_fields_use_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_engine_score = true").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert!(*config.show_engine_score());
    assert!(!*config.show_search_stats());
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_filter = \"strictly_tictactoe=debug\"\nshow_engine_score = false\nshow_search_stats = true"
    )
    .unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "strictly_tictactoe=debug");
    assert!(*config.show_search_stats());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_toml_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_engine_score = \"maybe\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
