//! End-to-end tests for the conversion pipeline using the mock generator.

use std::fs;

use dnalet_config::ProjectConfig;
use dnalet_core::{ConvertRequest, CoreError, Pipeline};
use dnalet_runner::MockGenerator;
use dnalet_unit::UnitFile;
use tempfile::tempdir;

const CONFIG: &str = r#"
[general]
env_file = "/etc/app/app.env"

[container.db]
name = "<auto>"

[container.db.volumes]
"/var/lib/postgresql/data" = "/srv/app/db:Z"
"#;

fn mock_podlet() -> MockGenerator {
    MockGenerator::new()
        .with_unit(
            "web.container",
            "[Unit]\nRequires=db.service\nAfter=db.service\n\n[Container]\nImage=docker.io/library/nginx:latest\nEnvironment=TZ=UTC\nPublishPort=8080:80\n",
        )
        .with_unit(
            "db.container",
            "[Container]\nImage=docker.io/library/postgres:16\nEnvironment=POSTGRES_PASSWORD=secret\nVolume=./pgdata:/var/lib/postgresql/data\n\n[Service]\nRestart=always\n",
        )
}

#[test]
fn test_convert_end_to_end() {
    let temp = tempdir().unwrap();
    let output_dir = temp.path().join("roles").join("app").join("templates");
    let seed_env = temp.path().join("seed.env");
    fs::write(&seed_env, "GLOBAL=1\n").unwrap();

    let config = ProjectConfig::parse(CONFIG).unwrap();
    let mock = mock_podlet();
    let pipeline = Pipeline::new(&mock, &config);

    let summary = pipeline
        .convert(&ConvertRequest {
            compose_file: temp.path().join("compose.yaml"),
            service_name: "app".to_string(),
            output_dir: output_dir.clone(),
            env_file: Some(seed_env),
        })
        .unwrap();

    let mut names: Vec<_> = summary
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec![".env", "app-db.container", "app.network", "web.container"]);

    assert_eq!(summary.renames.len(), 1);
    assert_eq!(summary.renames[0].new_service, "app-db.service");

    let web = UnitFile::read(output_dir.join("web.container")).unwrap();
    assert_eq!(web.get("Unit", "Requires"), Some("app-db.service"));
    assert_eq!(web.get("Unit", "After"), Some("app-db.service"));
    assert_eq!(web.get("Container", "Network"), Some("app.network"));
    assert_eq!(web.get("Container", "EnvironmentFile"), Some("/etc/app/app.env"));
    assert_eq!(web.get("Service", "TimeoutStartSec"), Some("900"));
    assert!(web.get("Container", "Environment").is_none());

    let db = UnitFile::read(output_dir.join("app-db.container")).unwrap();
    assert_eq!(
        db.get_values("Container", "Volume"),
        ["/srv/app/db:/var/lib/postgresql/data:Z"]
    );
    assert_eq!(db.get("Service", "Restart"), Some("always"));

    let network = UnitFile::read(output_dir.join("app.network")).unwrap();
    assert_eq!(network.get("Unit", "Description"), Some("Network for app"));
    assert_eq!(network.get("Network", "Label"), Some("app=app"));

    let env = fs::read_to_string(output_dir.join(".env")).unwrap();
    assert_eq!(
        env,
        "GLOBAL=1\n\n# Variables from db\nPOSTGRES_PASSWORD=secret\n\n# Variables from web\nTZ=UTC\n"
    );

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert!(!calls[0].output_dir.exists(), "build directory should be removed");
}

#[test]
fn test_conversion_failure_aborts_run() {
    let temp = tempdir().unwrap();
    let output_dir = temp.path().join("out");

    let config = ProjectConfig::parse(CONFIG).unwrap();
    let mock = MockGenerator::new().fail_with("Error: unsupported option `build`");
    let pipeline = Pipeline::new(&mock, &config);

    let err = pipeline
        .convert(&ConvertRequest {
            compose_file: temp.path().join("compose.yaml"),
            service_name: "app".to_string(),
            output_dir: output_dir.clone(),
            env_file: None,
        })
        .unwrap_err();

    assert!(err.is_conversion());
    assert!(!output_dir.exists());
    assert!(!mock.calls()[0].output_dir.exists());
}

#[test]
fn test_missing_env_file_is_configuration_error() {
    let temp = tempdir().unwrap();
    let config = ProjectConfig::parse("[container.db]\nname = \"<auto>\"\n").unwrap();
    let mock = mock_podlet();

    let err = Pipeline::new(&mock, &config)
        .convert(&ConvertRequest {
            compose_file: temp.path().join("compose.yaml"),
            service_name: "app".to_string(),
            output_dir: temp.path().join("out"),
            env_file: None,
        })
        .unwrap_err();

    assert!(matches!(err, CoreError::MissingEnvFile));
    assert!(err.is_configuration());
}

#[test]
fn test_generate_config_prints_volume_tables() {
    let config = ProjectConfig::empty();
    let mock = mock_podlet();

    let tables = Pipeline::new(&mock, &config)
        .generate_config("compose.yaml".as_ref())
        .unwrap();

    assert_eq!(
        tables,
        "[container.db.volumes]\n\"/var/lib/postgresql/data\" = \"./pgdata\"\n\n\
         [container.web.volumes]\n\n"
    );
}
