//! Shared test utilities for appcfg CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write sample documents into temp directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The variables referenced by `SAMPLE_DOC` are set on every command.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Document used across CLI tests. References `${APPCFG_TEST_HOST}`.
pub const SAMPLE_DOC: &str = r#"{
    "ApplicationName": "orders",
    "DefaultEndpointID": "pay",
    "Databases": [{"ID": "main", "DriverName": "postgres", "ConnectionString": "host=${APPCFG_TEST_HOST}"}],
    "APIEndpoints": [{"ID": "pay", "Address": "https://${APPCFG_TEST_HOST}/pay"}],
    "Flags": [{"Key": "MAX_ROWS", "Value": "500"}]
}"#;

/// Returns a hermetic `appcfg` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `APPCFG_SOURCE` is cleared so tests choose the source explicitly.
/// - `APPCFG_TEST_HOST` resolves to `db.test`.
pub fn appcfg_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("appcfg");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("APPCFG_SOURCE");
    cmd.env("APPCFG_TEST_HOST", "db.test");

    cmd
}

/// Writes `content` to `config.json` in a new temp dir.
///
/// The dir is returned so it outlives the test body.
pub fn write_doc(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
