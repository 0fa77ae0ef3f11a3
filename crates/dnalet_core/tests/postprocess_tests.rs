//! Integration tests for per-unit post-processing.

use std::fs;

use dnalet_config::ProjectConfig;
use dnalet_core::{CoreError, UnitPostProcessor};
use dnalet_unit::UnitFile;
use tempfile::tempdir;

const CONFIG: &str = r#"
[general]
env_file = "/etc/app/app.env"

[container.web.volumes]
"/app/data" = "/srv/x:Z"
"#;

const WEB: &str = "[Unit]
Requires=db.service

[Container]
Image=docker.io/library/nginx:latest
Environment=TZ=UTC
Volume=/data:/app/data
Environment=MODE=production
Volume=/logs:/app/logs
EnvironmentFile=/old/path.env
";

#[test]
fn test_process_moves_environment_and_rewrites_volumes() {
    let temp = tempdir().unwrap();
    let unit_path = temp.path().join("web.container");
    let env_path = temp.path().join(".env");
    fs::write(&unit_path, WEB).unwrap();
    fs::write(&env_path, "SEED=1\n").unwrap();

    let config = ProjectConfig::parse(CONFIG).unwrap();
    UnitPostProcessor::new(&config, &env_path)
        .process(&unit_path)
        .unwrap();

    let unit = UnitFile::read(&unit_path).unwrap();
    assert!(unit.get_values("Container", "Environment").is_empty());
    assert_eq!(
        unit.get_values("Container", "Volume"),
        ["/srv/x:/app/data:Z", "/logs:/app/logs"]
    );
    assert_eq!(
        unit.get_values("Container", "EnvironmentFile"),
        ["/etc/app/app.env"]
    );
    assert_eq!(unit.get("Unit", "Requires"), Some("db.service"));

    assert_eq!(
        fs::read_to_string(&env_path).unwrap(),
        "SEED=1\n\n# Variables from web\nTZ=UTC\nMODE=production\n"
    );
}

#[test]
fn test_units_accumulate_in_env_file() {
    let temp = tempdir().unwrap();
    let env_path = temp.path().join(".env");
    let web = temp.path().join("web.container");
    let db = temp.path().join("db.container");
    fs::write(&web, "[Container]\nEnvironment=A=1\n").unwrap();
    fs::write(&db, "[Container]\nEnvironment=B=2\n").unwrap();

    let config = ProjectConfig::parse(CONFIG).unwrap();
    let processor = UnitPostProcessor::new(&config, &env_path);
    processor.process(&web).unwrap();
    processor.process(&db).unwrap();

    let env = fs::read_to_string(&env_path).unwrap();
    assert_eq!(env, "\n# Variables from web\nA=1\n\n# Variables from db\nB=2\n");
}

#[test]
fn test_missing_env_file_config_mutates_nothing() {
    let temp = tempdir().unwrap();
    let unit_path = temp.path().join("web.container");
    let env_path = temp.path().join(".env");
    fs::write(&unit_path, WEB).unwrap();

    let config = ProjectConfig::parse("[container.web]\nname = \"<auto>\"\n").unwrap();
    let result = UnitPostProcessor::new(&config, &env_path).process(&unit_path);

    assert!(matches!(result, Err(CoreError::MissingEnvFile)));
    assert_eq!(fs::read_to_string(&unit_path).unwrap(), WEB);
    assert!(!env_path.exists());
}
