//! Configuration system tests
//!
//! Tests for config paths and docking config loading/saving.

use dockyard::config::DockingConfig;
use dockyard::config_paths;
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("dockyard"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_inside_config_dir() {
    if let (Some(dir), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&dir));
    }
}

// ========================================================================
// DockingConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = DockingConfig::default();
    assert_eq!(config.splitter_size, 6.0);
    assert!(!config.allow_mixed_orientation);
    assert_eq!(config.auto_hide_delay_ms, 400);
    assert_eq!(config.pane_min_width, 25.0);
    assert_eq!(config.pane_min_height, 25.0);
}

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.yaml");
    let config = DockingConfig {
        splitter_size: 4.0,
        allow_mixed_orientation: true,
        auto_hide_delay_ms: 250,
        ..DockingConfig::default()
    };

    config.save_to(&path).unwrap();
    let loaded = DockingConfig::load_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "splitter_size: 10\ntab_width: 90\n").unwrap();

    let config = DockingConfig::load_from(&path).unwrap();

    assert_eq!(config.splitter_size, 10.0);
    assert_eq!(config.tab_width, 90.0);
    assert_eq!(config.auto_hide_delay_ms, 400);
    assert_eq!(config.floating_width, 300.0);
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "splitter_size: [not, a, number]\n").unwrap();

    assert!(DockingConfig::load_from(&path).is_err());
    assert_eq!(DockingConfig::load_or_default(&path), DockingConfig::default());
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.yaml");

    assert_eq!(DockingConfig::load_or_default(&path), DockingConfig::default());
    let err = DockingConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.yaml"));
}
