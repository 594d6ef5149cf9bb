// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use envread::cli::check::OutputFormat;
use envread::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["envread", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["envread"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn cli_check_service_schema() {
    let cli = Cli::try_parse_from([
        "envread",
        "check",
        "-v",
        "API_PORT:required=A number for the port the API will listen on",
        "-v",
        "PAYMENT_SERVICE_KEY:required,secret=A key from PaymentService used to authenticate requests",
        "-v",
        "LOG_LEVEL=Specify log level as 'info', 'warn', or 'error'",
        "--no-report",
        "-f",
        "none",
    ])
    .unwrap();

    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    let summary: Vec<_> = args
        .vars
        .iter()
        .map(|v| (v.key(), v.is_required(), v.is_secret()))
        .collect();
    assert_eq!(
        summary,
        [
            ("API_PORT", true, false),
            ("PAYMENT_SERVICE_KEY", true, true),
            ("LOG_LEVEL", false, false),
        ]
    );
    assert_eq!(
        args.vars[2].description(),
        "Specify log level as 'info', 'warn', or 'error'"
    );
    assert!(args.no_report);
    assert_eq!(args.format, OutputFormat::None);
}

#[test]
fn cli_check_unknown_format_rejected() {
    let result = Cli::try_parse_from(["envread", "check", "-v", "PORT", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_log_options() {
    let cli = Cli::try_parse_from([
        "envread",
        "--log-level",
        "0",
        "--log-file",
        "logs/envread.log",
        "--file-log-level",
        "5",
        "check",
        "-v",
        "PORT",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(0));
    assert_eq!(cli.global.file_log_level, Some(5));
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("logs/envread.log"))
    );
}
