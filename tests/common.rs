use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn metrograph() -> Command {
    cargo_bin_cmd!("metrograph")
}

/// Three stops on one line: Alpha -> Bravo -> Charlie.
#[allow(dead_code)]
pub const LINE_NETWORK: &str = r#"{
    "stops": [
        {"id": 1, "name": "Alpha"},
        {"id": 2, "name": "Bravo"},
        {"id": 3, "name": "Charlie"}
    ],
    "connections": [
        {"from": 1, "to": 2},
        {"from": 2, "to": 3}
    ]
}"#;

/// Diamond: two equal-length routes from Alpha to Delta.
#[allow(dead_code)]
pub const DIAMOND_NETWORK: &str = r#"{
    "stops": [
        {"id": 1, "name": "Alpha"},
        {"id": 2, "name": "Bravo"},
        {"id": 3, "name": "Charlie"},
        {"id": 4, "name": "Delta"}
    ],
    "connections": [
        {"from": 1, "to": 2},
        {"from": 1, "to": 3},
        {"from": 2, "to": 4},
        {"from": 3, "to": 4}
    ]
}"#;

/// Write `document` to disk and import it into a fresh database,
/// returning the database path.
#[allow(dead_code)]
pub fn import_network(dir: &Path, document: &str) -> PathBuf {
    let file = dir.join("network.json");
    fs::write(&file, document).expect("failed to write network document");

    let db = dir.join("metro.db");
    metrograph()
        .arg("--database")
        .arg(&db)
        .arg("import")
        .arg(&file)
        .assert()
        .success();

    db
}
