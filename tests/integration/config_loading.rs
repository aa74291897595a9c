use depslot::config::{ConfigLoader, CONFIG_FILE_NAME};
use depslot::{ContextError, ContextRegistry, DuplicatePolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_without_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.logging.format, "text");
    assert_eq!(config.logging.output, "stderr");
}

#[test]
fn load_reads_local_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        r#"
[registry]
duplicate_policy = "reject"

[logging]
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.registry.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(config.logging.format, "json");

    let registry = ContextRegistry::from_config(&config.registry);
    assert_eq!(registry.policy(), DuplicatePolicy::Reject);
}

#[test]
fn load_from_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ContextError::ConfigError(_)));
}

#[test]
fn environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "[logging]\ncolor = true\n").unwrap();

    std::env::set_var("DEPSLOT__LOGGING__COLOR", "false");
    let result = ConfigLoader::load_from_file(&path);
    std::env::remove_var("DEPSLOT__LOGGING__COLOR");

    assert!(!result.unwrap().logging.color);
}
