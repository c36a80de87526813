//! Loading configuration from files.

use std::io::Write;

use fontstyle::{ConfigError, FontStyleConfig, FontStyleEditing};

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_yaml_file() {
    let file = write_config(".yaml", "options: [tiny, 10, default]\n");
    let config = FontStyleConfig::from_path(file.path()).unwrap();
    let editing = FontStyleEditing::new(config).unwrap();

    let models: Vec<_> = editing
        .options()
        .iter()
        .map(|option| option.model.as_deref())
        .collect();
    assert_eq!(models, vec![Some("tiny"), Some("10px"), None]);
}

#[test]
fn test_load_json_file() {
    let file = write_config(
        ".json",
        r#"{"options": [9, 11, "default"], "supportAllValues": true}"#,
    );
    let config = FontStyleConfig::from_path(file.path()).unwrap();
    assert!(config.support_all_values);
    assert!(FontStyleEditing::new(config).unwrap().rules().is_permissive());
}

#[test]
fn test_invalid_definition_in_file() {
    let file = write_config(".yml", "options:\n  - title: Broken\n");
    let config = FontStyleConfig::from_path(file.path()).unwrap();
    let err = FontStyleEditing::new(config).unwrap_err();
    assert_eq!(err.code(), "invalid-option-definition");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FontStyleConfig::from_path(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(err.code(), "config-io");
}
