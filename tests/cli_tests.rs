#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
//! Command-line tests driving the compiled binary over fixture directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, content).expect("write fixture");
}

/// Results for two files: truss and actionlint agree on one error in ci.yml,
/// actionlint alone reports one in release.yml. yamllint has a broken file.
fn write_results(root: &Path) {
    write_file(
        &root.join("truss/ci.json"),
        r#"{
            "file": "ci.yml",
            "valid": false,
            "duration_ms": 1.0,
            "diagnostics": [
                {"message": "missing field 'name'", "severity": "Error", "span": {"start": 0, "end": 4}},
                {"message": "line too long", "severity": "Warning", "span": {"start": 10, "end": 90}}
            ]
        }"#,
    );
    write_file(
        &root.join("truss/release.json"),
        r#"{"file": "release.yml", "valid": true, "duration_ms": 3.0, "diagnostics": []}"#,
    );
    write_file(
        &root.join("actionlint/all.json"),
        r#"[
            {
                "file": "ci.yml",
                "valid": false,
                "duration_ms": 20.0,
                "diagnostics": [
                    {"message": "Missing field: name", "severity": "error", "location": {"line": 2, "column": 1}}
                ]
            },
            {
                "file": "release.yml",
                "valid": false,
                "duration_ms": 20.0,
                "diagnostics": [
                    {"message": "unknown permission scope \"packages-write\"", "severity": "error", "location": {"line": 9, "column": 5}}
                ]
            },
            {"file": "broken.yml", "error": "actionlint not found"}
        ]"#,
    );
    write_file(&root.join("yamllint/ci.json"), "{ this is not json");
}

fn run(args: &[&str]) -> std::process::Output {
    let mut cmd = Command::cargo_bin("truss-compare").expect("truss-compare binary");
    cmd.args(args);
    cmd.output().expect("run truss-compare")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_compare_prints_document() {
    let dir = tempdir().unwrap();
    write_results(dir.path());

    let output = run(&["compare", dir.path().to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let doc = stdout_json(&output);
    assert_eq!(doc["files_analyzed"], 2);
    assert_eq!(doc["files"][0]["path"], "ci.yml");
    assert_eq!(doc["files"][1]["path"], "release.yml");
    assert!(doc["timestamp"].as_str().unwrap().ends_with('Z'));

    let ci = &doc["files"][0]["comparison"]["actionlint"];
    assert_eq!(ci["errors_in_common"], 1);
    assert_eq!(ci["unique_to_subject"], 0);
    assert_eq!(ci["unique_to_competitor"], 0);

    assert_eq!(doc["tools"]["truss"]["errors_found"], 1);
    assert_eq!(doc["tools"]["truss"]["files_analyzed"], 2);
    assert_eq!(doc["tools"]["actionlint"]["errors_found"], 2);
    assert_eq!(doc["tools"]["yamllint"]["files_analyzed"], 0);

    assert_eq!(doc["coverage_analysis"]["actionlint"]["subject_found"], 1);
    assert_eq!(doc["coverage_analysis"]["actionlint"]["coverage"], 0.5);
    assert_eq!(doc["coverage_analysis"]["yamllint"]["coverage"], 1.0);

    assert_eq!(doc["summary"]["subject"], "truss");
    assert_eq!(doc["summary"]["primary_competitor"], "actionlint");
    assert_eq!(doc["summary"]["coverage_subject"], 0.5);
    assert_eq!(doc["summary"]["avg_time_subject_ms"], 2.0);
    assert_eq!(doc["summary"]["avg_time_competitor_ms"], 20.0);
}

#[test]
fn test_compare_warns_about_bad_and_missing_results() {
    let dir = tempdir().unwrap();
    write_results(dir.path());

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args(["compare", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid JSON"))
        .stderr(predicate::str::contains("No valid results found"));
}

#[test]
fn test_compare_missing_results_dir_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args(["compare", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Results directory not found"));
}

#[test]
fn test_compare_writes_output_file() {
    let dir = tempdir().unwrap();
    write_results(dir.path());
    let out = dir.path().join("comparison.json");

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args([
            "compare",
            dir.path().to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Comparison results written to"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["files_analyzed"], 2);
}

#[test]
fn test_compare_roster_and_threshold_overrides() {
    let dir = tempdir().unwrap();
    write_results(dir.path());

    let output = run(&[
        "compare",
        dir.path().to_str().unwrap(),
        "--competitor",
        "actionlint",
        "--threshold",
        "1.0",
    ]);
    assert!(output.status.success());

    let doc = stdout_json(&output);
    let tools: Vec<&String> = doc["tools"].as_object().unwrap().keys().collect();
    assert_eq!(tools.len(), 2);
    // The rephrased message no longer clears an exact-match threshold
    assert_eq!(
        doc["files"][0]["comparison"]["actionlint"]["errors_in_common"],
        0
    );
}

#[test]
fn test_compare_config_file() {
    let dir = tempdir().unwrap();
    write_results(dir.path());
    let config = dir.path().join("config.json");
    write_file(
        &config,
        r#"{"subject": "actionlint", "competitors": ["truss"]}"#,
    );

    let output = run(&[
        "compare",
        dir.path().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["summary"]["subject"], "actionlint");
    assert_eq!(doc["coverage_analysis"]["truss"]["coverage"], 1.0);
}

#[test]
fn test_compare_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    write_results(dir.path());

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args([
            "compare",
            dir.path().to_str().unwrap(),
            "--competitor",
            "truss",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("also listed as a competitor"));
}

#[test]
fn test_compare_tsv_format() {
    let dir = tempdir().unwrap();
    write_results(dir.path());

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args([
            "--format",
            "tsv",
            "compare",
            dir.path().to_str().unwrap(),
            "--competitor",
            "actionlint",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("path\tcompetitor"))
        .stdout(predicate::str::contains("ci.yml\tactionlint\t1\t0\t0\t1.0000"))
        .stdout(predicate::str::contains(
            "release.yml\tactionlint\t0\t0\t1\t0.0000",
        ));
}

#[test]
fn test_compare_text_format() {
    let dir = tempdir().unwrap();
    write_results(dir.path());

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args(["-f", "text", "compare", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results"))
        .stdout(predicate::str::contains("actionlint: 1/2 (50.0%)"));
}

#[test]
fn test_report_writes_markdown_and_html() {
    let dir = tempdir().unwrap();
    write_results(dir.path());
    let doc = dir.path().join("comparison.json");
    let reports = dir.path().join("reports");

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args([
            "compare",
            dir.path().to_str().unwrap(),
            "-o",
            doc.to_str().unwrap(),
        ])
        .assert()
        .success();

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args([
            "report",
            doc.to_str().unwrap(),
            "--output-dir",
            reports.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Markdown report written to"));

    let markdown = fs::read_to_string(reports.join("summary.md")).unwrap();
    assert!(markdown.contains("- **truss Coverage:** 50.0%"));
    assert!(markdown.contains("### release.yml"));

    let html = fs::read_to_string(reports.join("summary.html")).unwrap();
    assert!(html.contains("<td class=\"coverage-poor\">50.0%</td>"));
}

#[test]
fn test_report_missing_input_fails() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("truss-compare")
        .unwrap()
        .args(["report", dir.path().join("nope.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Comparison file not found"));
}
