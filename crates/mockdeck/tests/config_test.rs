//! Tests for configuration loading.

use mockdeck::{MockdeckConfig, MockdeckErrorKind};
use std::path::Path;

#[test]
fn test_defaults() {
    let config = MockdeckConfig::default();
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.store().directory(), Path::new("decks"));
    assert!(*config.export().pretty());

    assert_eq!(MockdeckConfig::load(None).unwrap(), config);
}

#[test]
fn test_empty_file_uses_defaults() {
    assert_eq!(
        MockdeckConfig::from_toml("").unwrap(),
        MockdeckConfig::default()
    );
}

#[test]
fn test_partial_file_fills_defaults() {
    let config = MockdeckConfig::from_toml(
        r#"
        [export]
        pretty = false
        "#,
    )
    .unwrap();
    assert!(!*config.export().pretty());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.store().directory(), Path::new("decks"));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mockdeck.toml");
    std::fs::write(
        &path,
        r#"
        log_filter = "mockdeck=debug"

        [store]
        directory = "/tmp/mockdeck-decks"
        "#,
    )
    .unwrap();

    let config = MockdeckConfig::load(Some(&path)).unwrap();
    assert_eq!(config.log_filter(), "mockdeck=debug");
    assert_eq!(
        config.store().directory(),
        Path::new("/tmp/mockdeck-decks")
    );
}

#[test]
fn test_errors_are_config_errors() {
    let err = MockdeckConfig::from_toml("log_filter = [").unwrap_err();
    assert!(matches!(err.kind(), MockdeckErrorKind::Config(_)));

    let err = MockdeckConfig::from_file("/nonexistent/mockdeck.toml").unwrap_err();
    assert!(matches!(err.kind(), MockdeckErrorKind::Config(_)));
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_file_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[store\n").unwrap();

    let err = MockdeckConfig::from_file(&path).unwrap_err();
    match err.kind() {
        MockdeckErrorKind::Config(config) => {
            assert_eq!(config.path.as_deref(), Some(path.as_path()));
            assert!(config.message.contains("Failed to parse config"));
        }
        other => panic!("expected a config error, got {}", other),
    }
    assert!(err.to_string().contains("broken.toml"));
}
