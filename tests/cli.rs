// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Process-level tests of the command line interface.

use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_ast2json");

#[test]
fn valid_input_prints_one_json_line() {
    let output = Command::new(BIN)
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/input/classes.py"))
        .output()
        .expect("could not run ast2json");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches('\n').count(), 1);
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 1);
    assert!(value.get("Module").is_some());
}

#[test]
fn missing_input_file_fails_without_output() {
    let output = Command::new(BIN)
        .arg("does/not/exist.py")
        .output()
        .expect("could not run ast2json");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unbalanced_syntax_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.py");
    std::fs::write(&path, "print((1)\n").unwrap();

    let output = Command::new(BIN).arg(&path).output().expect("could not run ast2json");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn no_input_file_fails() {
    let output = Command::new(BIN).output().expect("could not run ast2json");
    assert!(!output.status.success());
}

#[test]
fn version_switch_prints_version() {
    let output = Command::new(BIN).arg("--version").output().expect("could not run ast2json");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("ast2json "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
