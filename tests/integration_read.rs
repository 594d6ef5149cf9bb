// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests running the `envread` binary.
//!
//! Every run starts from a cleared environment so results do not depend on
//! the machine running the tests.

use std::process::{Command, Output};

fn envread(args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_envread"))
        .args(args)
        .env_clear()
        .envs(vars.iter().copied())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Required Variables
// =============================================================================

#[test]
fn read_required_present() {
    let output = envread(
        &["check", "-v", "PORT:required=port"],
        &[("PORT", "8080")],
    );

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "PORT=8080\n");
    assert!(stderr(&output).contains("│ PORT     │ 8080  │ port        │"));
}

#[test]
fn read_required_missing_exits_with_one() {
    let output = envread(&["check", "-v", "PORT:required=port"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "no record is produced");
    let err = stderr(&output);
    assert!(err.contains("missing required environment variable: PORT"), "{err}");
    assert!(!err.contains("Variable"), "no table is reported");
}

#[test]
fn read_required_empty_exits_with_one() {
    let output = envread(&["check", "-v", "PORT:required"], &[("PORT", "")]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn read_reports_every_missing_variable() {
    let output = envread(
        &["check", "-v", "A:required", "-v", "B", "-v", "C:required"],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing required environment variables: A, C"));
}

// =============================================================================
// Optional and Secret Variables
// =============================================================================

#[test]
fn read_optional_missing_succeeds() {
    let output = envread(
        &["check", "-v", "LOG_LEVEL=log level", "-f", "json"],
        &[],
    );

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record, serde_json::json!({ "LOG_LEVEL": "" }));
    assert!(stderr(&output).contains("Missing from environment"));
}

#[test]
fn read_secret_is_masked_on_stderr_only() {
    let output = envread(
        &["check", "-v", "KEY:secret=secret key"],
        &[("KEY", "abcdefgh1234")],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "KEY=abcdefgh1234\n");
    let err = stderr(&output);
    assert!(err.contains("****1234"), "{err}");
    assert!(!err.contains("abcdefgh"), "{err}");
}

#[test]
fn read_no_report_keeps_stderr_clean() {
    let output = envread(
        &["check", "-v", "PORT", "--no-report", "-f", "none"],
        &[("PORT", "1")],
    );

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
}

// =============================================================================
// Usage Errors
// =============================================================================

#[test]
fn read_duplicate_declaration_fails() {
    let output = envread(&["check", "-v", "PORT", "-v", "PORT:required"], &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("variable 'PORT' is declared more than once"));
}

#[test]
fn version_prints_package_version() {
    let output = envread(&["version"], &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}
