//! Integration tests for loading dnalet.toml from disk.

use std::fs;

use dnalet_config::{ConfigError, ProjectConfig, RenameDirective};
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("dnalet.toml");
    fs::write(
        &path,
        r#"
[general]
env_file = "/etc/nextcloud/nextcloud.env"

[container.app]
name = "nextcloud"

[container.app.volumes]
"/var/www/html" = "/srv/nextcloud/html:Z"
"#,
    )
    .unwrap();

    let config = ProjectConfig::load(&path).unwrap();

    assert!(config.is_loaded());
    assert_eq!(config.env_file(), Some("/etc/nextcloud/nextcloud.env"));
    assert_eq!(
        config.rename_directive("app"),
        Some(RenameDirective::Explicit("nextcloud".to_string()))
    );
    assert_eq!(config.volume_rewrites("app").len(), 1);
}

#[test]
fn test_missing_file_is_empty_config() {
    let temp = tempdir().unwrap();

    let config = ProjectConfig::load(temp.path().join("dnalet.toml")).unwrap();

    assert!(!config.is_loaded());
    assert!(config.env_file().is_none());
}

#[test]
fn test_malformed_file_reports_path() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("dnalet.toml");
    fs::write(&path, "[container.app\nname = 1").unwrap();

    match ProjectConfig::load(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {:?}", other),
    }
}
