//! Integration tests for reading and writing unit files on disk.

use std::fs;

use dnalet_unit::{UnitError, UnitFile};
use tempfile::tempdir;

const WEB_CONTAINER: &str = "[Unit]
Requires=db.service
After=network-online.target db.service

[Container]
Image=docker.io/library/nginx:latest
PublishPort=8080:80
Volume=./html:/usr/share/nginx/html
Volume=./conf:/etc/nginx/conf.d
Volume=./logs:/var/log/nginx
Environment=TZ=UTC
Environment=NGINX_PORT=80

[Install]
WantedBy=default.target
";

#[test]
fn test_read_write_preserves_semantics() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("web.container");
    fs::write(&path, WEB_CONTAINER).unwrap();

    let unit = UnitFile::read(&path).unwrap();
    unit.write(&path).unwrap();
    let reread = UnitFile::read(&path).unwrap();

    assert_eq!(unit, reread);
    assert_eq!(
        reread.sections().collect::<Vec<_>>(),
        vec!["Unit", "Container", "Install"]
    );
    assert_eq!(
        reread.keys("Container"),
        vec!["Image", "PublishPort", "Volume", "Environment"]
    );
    assert_eq!(reread.get_values("Container", "Environment"), ["TZ=UTC", "NGINX_PORT=80"]);
}

#[test]
fn test_three_volumes_parse_in_order() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("web.container");
    fs::write(&path, WEB_CONTAINER).unwrap();

    let unit = UnitFile::read(&path).unwrap();
    let volumes = unit.get_values("Container", "Volume");

    assert_eq!(volumes.len(), 3);
    assert_eq!(volumes[0], "./html:/usr/share/nginx/html");
    assert_eq!(volumes[2], "./logs:/var/log/nginx");
    assert_eq!(unit.get("Container", "Volume"), Some("./logs:/var/log/nginx"));
}

#[test]
fn test_write_truncates_existing_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("small.container");
    fs::write(&path, WEB_CONTAINER).unwrap();

    let mut unit = UnitFile::new();
    unit.set("Container", "Image", "alpine");
    unit.write(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[Container]\nImage=alpine\n\n");
}

#[test]
fn test_read_missing_file_reports_path() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("absent.container");

    let err = UnitFile::read(&path).unwrap_err();
    match err {
        UnitError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
