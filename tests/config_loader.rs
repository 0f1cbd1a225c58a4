use std::path::PathBuf;

use stateful::binding::Message;
use stateful::config::{Config, ConfigError, Outcome};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.placeholder.text, "No numbers loaded.");
    assert_eq!(config.placeholder.icon.as_deref(), Some("□"));
    assert_eq!(config.loader.delay_ms, 1000);
    assert_eq!(
        config.loader.outcomes,
        vec![Outcome::Numbers, Outcome::Empty, Outcome::Numbers, Outcome::Error]
    );
    assert_eq!(config.ui.tick_ms, 250);
    assert!(config.logging.file.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("stateful/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[loader]
delay_ms = 10
outcomes = ["error", "numbers"]

[logging]
file = "/tmp/stateful.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.loader.delay_ms, 10);
    assert_eq!(config.loader.outcomes, vec![Outcome::Error, Outcome::Numbers]);
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/stateful.log")));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.ui.tick_ms, 250);
    assert_eq!(config.placeholder, Config::default().placeholder);
}

#[test]
fn test_placeholder_section() {
    let (_dir, path) = write_config(
        r#"
[placeholder]
text = "Nothing yet"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.placeholder, Message::new("Nothing yet"));
}

#[test]
fn test_empty_outcomes_rejected() {
    let (_dir, path) = write_config(
        r#"
[loader]
outcomes = []
"#,
    );

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("loader.outcomes"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_zero_tick_rejected() {
    let mut config = Config::default();
    config.ui.tick_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_invalid_toml_reports_path() {
    let (_dir, path) = write_config("[loader\ndelay_ms = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_outcome_rejected() {
    let (_dir, path) = write_config(
        r#"
[loader]
outcomes = ["sometimes"]
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
