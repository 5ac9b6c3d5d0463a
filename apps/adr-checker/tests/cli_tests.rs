//! End-to-end tests for the adr-checker binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, body).unwrap();
}

/// Repository with ADR-0001/0002 documented and ADR-0001..0003 cited.
fn setup_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".git")).unwrap();
    write(
        root,
        "docs/adr/0001-use-react.md",
        "# Use React\nStatus: Accepted\nDate: 2024-01-01\nTags: ui\n",
    );
    write(
        root,
        "docs/adr/0002-use-hooks.md",
        "# Use hooks\nStatus: Proposed\n\nSee [guide](./guide.md).\n",
    );
    write(root, "src/App.tsx", "/**\n * @adr ADR-0001\n */\n// ADR-0002: hooks\n");
    write(root, "src/db.ts", "// ADR-0003: mongo\n");
    temp_dir
}

fn adr_checker(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("adr-checker"));
    cmd.current_dir(root).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_scan_json_reports_missing_document_and_exits_one() {
    let repo = setup_repo();
    let output = adr_checker(repo.path())
        .args(["scan", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v = json_stdout(&output);
    assert_eq!(v["references"].as_array().unwrap().len(), 3);
    assert_eq!(v["documents"].as_array().unwrap().len(), 2);
    let issues = v["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["type"], "missing_document");
    assert_eq!(issues[0]["adrId"], "ADR-0003");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Found 1 issues"));
}

#[test]
fn test_scan_clean_project_exits_zero() {
    let repo = setup_repo();
    fs::remove_file(repo.path().join("src/db.ts")).unwrap();
    adr_checker(repo.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found!"))
        .stdout(predicate::str::contains("ADR-0001 - Use React"));
}

#[test]
fn test_scan_text_report_lists_missing_document() {
    let repo = setup_repo();
    adr_checker(repo.path())
        .arg("scan")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing ADR Documents (1):"))
        .stdout(predicate::str::contains("ADR-0003 referenced in src/db.ts:1"));
}

#[test]
fn test_scan_cli_dirs_override_defaults() {
    let repo = setup_repo();
    fs::rename(repo.path().join("src"), repo.path().join("app")).unwrap();
    let output = adr_checker(repo.path())
        .args(["scan", "-s", "app", "-f", "json"])
        .output()
        .unwrap();
    assert_eq!(json_stdout(&output)["references"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_directories_are_not_errors() {
    let repo = setup_repo();
    adr_checker(repo.path())
        .args(["scan", "--adr-dir", "nope", "--source-dir", "nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 ADR documents"));
}

#[test]
fn test_scan_writes_report_file() {
    let repo = setup_repo();
    adr_checker(repo.path())
        .args(["scan", "--format", "html", "--output", "report.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Report written to"));
    let html = fs::read_to_string(repo.path().join("report.html")).unwrap();
    assert!(html.contains("<h1>ADR Checker Report</h1>"));
}

#[test]
fn test_unwritable_output_is_fatal() {
    let repo = setup_repo();
    adr_checker(repo.path())
        .args(["scan", "--output", "no/such/dir/report.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_validate_docs_keeps_only_document_issues() {
    let repo = setup_repo();
    let output = adr_checker(repo.path())
        .args(["validate-docs", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let v = json_stdout(&output);
    let kinds: Vec<&str> = v["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["type"].as_str().unwrap())
        .collect();
    // ADR-0002 lacks a date and links a relative file; the missing ADR-0003 is filtered out
    assert_eq!(kinds, vec!["missing_metadata", "broken_link"]);
}

#[test]
fn test_init_then_scan_uses_config() {
    let repo = setup_repo();
    adr_checker(repo.path())
        .args(["init", "--path", "adr-checker.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration"));
    assert!(repo.path().join("adr-checker.toml").is_file());

    // Point the config at a renamed source dir and check it is honored
    fs::rename(repo.path().join("src"), repo.path().join("lib")).unwrap();
    write(
        repo.path(),
        ".adr-checker.json",
        r#"{ "sourceDir": "lib", "outputFormat": "json" }"#,
    );
    let output = adr_checker(repo.path()).arg("scan").output().unwrap();
    assert_eq!(json_stdout(&output)["references"].as_array().unwrap().len(), 3);
}

#[test]
fn test_configured_language_patterns_are_scanned() {
    let repo = setup_repo();
    write(repo.path(), "src/tool.py", "# ADR-0002 python side\n");
    write(
        repo.path(),
        ".adr-checker.json",
        r##"{
  "languages": {
    "javascript": { "extensions": [".ts", ".tsx"], "commentPatterns": [] },
    "python": { "extensions": [".py"], "commentPatterns": ["# ADR-(\\d+)"] }
  }
}"##,
    );
    let output = adr_checker(repo.path())
        .args(["scan", "--format", "json"])
        .output()
        .unwrap();
    let v = json_stdout(&output);
    let py: Vec<&Value> = v["references"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["file"].as_str().unwrap().ends_with("tool.py"))
        .collect();
    assert_eq!(py.len(), 1);
    assert_eq!(py[0]["commentType"], "# ADR-(\\d+)");
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let repo = setup_repo();
    write(repo.path(), ".adr-checker.json", "{ nope");
    adr_checker(repo.path())
        .args(["scan", "--format", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("using default configuration"));
}

#[test]
fn test_version() {
    let repo = setup_repo();
    adr_checker(repo.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
