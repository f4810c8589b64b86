//! Integration tests for the appcfg subcommands.

mod common;

use common::{SAMPLE_DOC, appcfg_cmd, write_doc};
use predicates::prelude::*;

#[test]
fn test_show_prints_resolved_document() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    let output = appcfg_cmd()
        .arg("--source")
        .arg(&path)
        .arg("show")
        .output()
        .unwrap();
    assert!(output.status.success());

    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["ApplicationName"], "orders");
    assert_eq!(shown["Databases"][0]["ConnectionString"], "host=db.test");
    assert_eq!(shown["DefaultDatabaseID"], "DEFAULT");
}

#[test]
fn test_show_raw_keeps_placeholders() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .args(["show", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("host=${APPCFG_TEST_HOST}"));
}

#[test]
fn test_source_from_environment() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    appcfg_cmd()
        .env("APPCFG_SOURCE", &path)
        .args(["field", "application_name"])
        .assert()
        .success()
        .stdout("\"orders\"\n");
}

#[test]
fn test_database_lookup_is_case_insensitive() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .args(["database", "MAIN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ConnectionString\": \"host=db.test\""));
}

#[test]
fn test_endpoint_defaults_to_document_default() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .arg("endpoint")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://db.test/pay"));
}

#[test]
fn test_flag_lookup_ignores_separators() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .args(["flag", "max-rows"])
        .assert()
        .success()
        .stdout("500\n");
}

#[test]
fn test_missing_record_returns_exit_code_4() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .args(["database", "reporting"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Database not found: reporting"));

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .args(["flag", "unknown"])
        .assert()
        .code(4);
}

#[test]
fn test_missing_file_returns_exit_code_3() {
    let dir = tempfile::TempDir::new().unwrap();

    appcfg_cmd()
        .arg("-s")
        .arg(dir.path().join("absent.json"))
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_malformed_and_empty_documents_return_exit_code_5() {
    let (_dir, path) = write_doc("{ nope");
    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .arg("show")
        .assert()
        .code(5);

    let (_dir, path) = write_doc("");
    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .arg("show")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No data from source"));
}

#[test]
fn test_no_source_is_a_general_error() {
    appcfg_cmd()
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("APPCFG_SOURCE"));
}

#[test]
fn test_save_normalizes_file_and_keeps_placeholders() {
    let (_dir, path) = write_doc(SAMPLE_DOC);

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .arg("save")
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("host=${APPCFG_TEST_HOST}"));
    assert!(written.contains("\t\"CookieDomain\": \"localhost\""));
}

#[test]
fn test_save_remote_document_returns_exit_code_6() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/config.json")
        .with_status(200)
        .with_body(SAMPLE_DOC)
        .create();
    let url = format!("{}/config.json", server.url());

    appcfg_cmd()
        .args(["-s", &url, "save"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Configuration file is not local"));
}

#[test]
fn test_remote_show() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/config.json")
        .with_status(200)
        .with_body(SAMPLE_DOC)
        .create();
    let url = format!("{}/config.json", server.url());

    appcfg_cmd()
        .args(["-s", &url, "field", "ApplicationName"])
        .assert()
        .success()
        .stdout("\"orders\"\n");
}

#[test]
fn test_output_file() {
    let (dir, path) = write_doc(SAMPLE_DOC);
    let out = dir.path().join("out.json");

    appcfg_cmd()
        .arg("-s")
        .arg(&path)
        .arg("--output-file")
        .arg(&out)
        .args(["database", "main"])
        .assert()
        .success()
        .stdout("");

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["ID"], "main");
}
