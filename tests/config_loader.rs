use rxstate::config::{CheckProgress, Config, ConfigError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.pipeline.check_debounce_ms, 200);
    assert_eq!(config.pipeline.event_capacity, 64);
    assert_eq!(config.pipeline.state_capacity, 64);
    assert_eq!(config.pipeline.check_progress, CheckProgress::Immediate);

    assert_eq!(config.service.create_latency_ms, 5000);
    assert_eq!(config.service.check_latency_ms, 0);
    assert_eq!(config.service.min_password_len, 3);

    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("rxstate/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("missing.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[pipeline]
check_debounce_ms = 50
check_progress = "after_debounce"

[service]
min_password_len = 8
"#,
    )
    .expect("write config");

    let config = Config::load_from(&path).expect("config");
    assert_eq!(config.pipeline.check_debounce_ms, 50);
    assert_eq!(config.pipeline.check_progress, CheckProgress::AfterDebounce);
    assert_eq!(config.pipeline.event_capacity, 64);
    assert_eq!(config.service.min_password_len, 8);
    assert_eq!(config.service.create_latency_ms, 5000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[pipeline\ncheck_debounce_ms = ").expect("write config");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_zero_debounce_fails_validation() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[pipeline]\ncheck_debounce_ms = 0\n").expect("write config");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_zero_capacity_fails_validation() {
    let mut config = Config::default();
    config.pipeline.state_capacity = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_password_length_fails_validation() {
    let mut config = Config::default();
    config.service.min_password_len = 0;
    assert!(config.validate().is_err());
}
