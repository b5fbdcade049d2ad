//! Tests for config file lookup order.

use replay_core::HistoryOrder;
use replay_tui::TuiConfig;
use std::path::{Path, PathBuf};

fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_explicit_path_beats_env() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = write_config(dir.path(), "explicit.toml", "order = \"descending\"");
    let env = write_config(dir.path(), "env.toml", "show_headers = false");

    let config = TuiConfig::resolve_in(Some(&explicit), Some(&env), dir.path()).unwrap();
    assert_eq!(*config.order(), HistoryOrder::Descending);
    assert!(*config.show_headers());
}

#[test]
fn test_env_path_beats_working_directory_file() {
    let dir = tempfile::tempdir().unwrap();
    let env = write_config(dir.path(), "env.toml", "log_filter = \"debug\"");
    write_config(dir.path(), TuiConfig::DEFAULT_FILE, "log_filter = \"warn\"");

    let config = TuiConfig::resolve_in(None, Some(&env), dir.path()).unwrap();
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_working_directory_file_used() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), TuiConfig::DEFAULT_FILE, "order = \"descending\"");

    let config = TuiConfig::resolve_in(None, None, dir.path()).unwrap();
    assert_eq!(*config.order(), HistoryOrder::Descending);
}

#[test]
fn test_defaults_when_nothing_found() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::resolve_in(None, None, dir.path()).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_missing_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");
    let err = TuiConfig::resolve_in(None, Some(&absent), dir.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
