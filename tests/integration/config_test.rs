use std::fs;

use type_tour::{TourConfig, TourError};

#[test]
fn test_default_config() {
    let config = TourConfig::default();
    assert_eq!(config.default_age, 18);
    assert_eq!(config.log_filter, "info");
    assert!(config.print_keys);
}

#[test]
fn test_config_from_file() {
    let path = std::env::temp_dir().join(format!("type-tour-config-{}.json", std::process::id()));
    fs::write(&path, r#"{ "log_filter": "debug", "print_keys": false }"#).unwrap();

    let config = TourConfig::from_path(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.log_filter, "debug");
    assert!(!config.print_keys);
    assert_eq!(config.default_age, 18);
}

#[test]
fn test_missing_config_file() {
    let path = std::env::temp_dir().join("type-tour-config-does-not-exist.json");
    let err = TourConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, TourError::IoError(_)));
}
