// Dweve BTool - Benchmark Result Tabulation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use btool_test::fixtures::documents;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn btool_cmd() -> Command {
    Command::cargo_bin("btool").expect("Failed to find btool binary")
}

fn result_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("results.xml");
    fs::write(&path, content).expect("Failed to write result file");
    path
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    btool_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmark result tabulation"))
        .stdout(predicate::str::contains("conv"));
}

#[test]
fn test_version_output() {
    btool_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("btool"));
}

#[test]
fn test_no_subcommand_fails() {
    btool_cmd().assert().failure();
}

// ===== Conv Command Tests =====

#[test]
fn test_conv_to_ods() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.ods");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let ods = fs::read(&output).unwrap();
    assert_eq!(&ods[..2], b"PK");
    // the uncompressed mimetype entry comes first
    let mimetype = b"application/vnd.oasis.opendocument.spreadsheet";
    assert!(ods.windows(mimetype.len()).take(128).any(|w| w == mimetype));
}

#[test]
fn test_conv_to_flat_ods() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.fods");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let ods = fs::read_to_string(&output).unwrap();
    assert!(ods.contains(r#"table:name="Instances""#));
    assert!(ods.contains(r#"table:name="Charts""#));
}

#[test]
fn test_conv_format_fods_overrides_ods_extension() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.ods");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .args(["--format", "fods", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert!(fs::read_to_string(&output).unwrap().starts_with("<?xml"));
}

#[test]
fn test_conv_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.fods");

    btool_cmd()
        .arg("conv")
        .arg("-o")
        .arg(&output)
        .write_stdin(documents::MULTI_RUN)
        .assert()
        .success();

    let ods = fs::read_to_string(&output).unwrap();
    assert!(ods.contains("Select run:"));
}

#[test]
fn test_conv_to_xlsx_by_extension() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.xlsx");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(&fs::read(&output).unwrap()[..2], b"PK");
}

#[test]
fn test_conv_format_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.bin");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .args(["--format", "xlsx", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(&fs::read(&output).unwrap()[..2], b"PK");
}

#[test]
fn test_conv_unknown_extension_fails() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.txt");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid input"));
    assert!(!output.exists());
}

#[test]
fn test_conv_export_values() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.fods");
    let csv = dir.path().join("values.csv");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--export-values")
        .arg(&csv)
        .assert()
        .success();

    let values = fs::read_to_string(&csv).unwrap();
    assert!(values.starts_with("instance,time/clasp-3.3.0/default"));
    assert!(values.contains("queens/q8.lp,7,10,0,1,1,120"));
}

#[test]
fn test_conv_measure_and_sheet_options() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.fods");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .args(["-m", "time:t", "--no-charts", "--no-merged-runs", "-o"])
        .arg(&output)
        .assert()
        .success();

    let ods = fs::read_to_string(&output).unwrap();
    assert!(ods.contains(r#"table:name="Classes""#));
    assert!(!ods.contains(r#"table:name="Merged_Runs""#));
    assert!(!ods.contains(r#"table:name="Charts""#));
    assert!(!ods.contains("<text:p>timeout</text:p>"));
}

#[test]
fn test_conv_project_filter() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_PROJECTS);
    let output = dir.path().join("report.fods");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .args(["-p", "no-such-project", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("no-such-project"));
}

#[test]
fn test_conv_invalid_measure_mode() {
    btool_cmd()
        .args(["conv", "-m", "time:x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time:x"));
}

#[test]
fn test_conv_empty_measure_name() {
    btool_cmd()
        .args(["conv", "-m", ":t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty measure name"));
}

#[test]
fn test_conv_missing_file() {
    btool_cmd()
        .args(["conv", "/nonexistent/results.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_conv_malformed_results() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, "<result><benchmark name=\"b\"></result>");
    let output = dir.path().join("report.fods");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Parse error"));
    assert!(!output.exists());
}

#[test]
fn test_conv_unwritable_export_leaves_no_report() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);
    let output = dir.path().join("report.ods");
    let values = dir.path().join("missing").join("values.csv");

    btool_cmd()
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--export-values")
        .arg(&values)
        .assert()
        .failure()
        .stderr(predicate::str::contains("values.csv"));
    assert!(!output.exists());
    assert!(!values.exists());
    // only the result file remains
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_conv_respects_max_file_size() {
    let dir = TempDir::new().unwrap();
    let input = result_file(&dir, documents::TWO_SETTINGS);

    btool_cmd()
        .env("BTOOL_MAX_FILE_SIZE", "16")
        .arg("conv")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("report.fods"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_conv_stdin_respects_max_file_size() {
    let dir = TempDir::new().unwrap();

    btool_cmd()
        .env("BTOOL_MAX_FILE_SIZE", "16")
        .arg("conv")
        .arg("-o")
        .arg(dir.path().join("report.fods"))
        .write_stdin(documents::TWO_SETTINGS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("<stdin>"));
}
