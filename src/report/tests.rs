// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{MISSING_PLACEHOLDER, Report, ReportRow, SECRET_MASK, display_value, mask_secret};
use crate::env::EnvSnapshot;
use crate::reader::resolve;
use crate::schema::{Schema, VariableSpec};

fn spec(key: &str, secret: bool) -> VariableSpec {
    VariableSpec::builder()
        .key(key)
        .description("test")
        .with_secret(secret)
        .build()
}

#[test]
fn test_display_value_rules() {
    let plain = spec("PLAIN", false);
    let secret = spec("SECRET", true);

    assert_eq!(display_value(&plain, "8080"), "8080");
    assert_eq!(display_value(&plain, ""), MISSING_PLACEHOLDER);
    assert_eq!(display_value(&secret, ""), MISSING_PLACEHOLDER);
    assert_eq!(display_value(&secret, "abcdefgh1234"), "****1234");
}

#[test]
fn test_mask_keeps_last_four_characters() {
    let long = "x".repeat(64);
    for value in ["abcd", "abcde", "abcdefgh1234", long.as_str()] {
        let masked = mask_secret(value);
        let tail: String = value.chars().skip(value.chars().count() - 4).collect();
        assert_eq!(masked, format!("{SECRET_MASK}{tail}"), "value {value:?}");
    }
}

#[test]
fn test_mask_short_secret_keeps_whole_value() {
    assert_eq!(mask_secret("abc"), "****abc");
    assert_eq!(mask_secret("a"), "****a");
    assert_eq!(mask_secret("äö"), "****äö");
    assert_eq!(display_value(&spec("SECRET", true), "abc"), "****abc");
}

#[test]
fn test_mask_counts_characters_not_bytes() {
    assert_eq!(mask_secret("pässwörd"), "****wörd");
    assert_eq!(mask_secret("日本語の秘密"), "****語の秘密");
}

#[test]
fn test_report_rows_follow_schema_order() {
    let schema = Schema::from_specs([
        VariableSpec::builder()
            .key("API_PORT")
            .description("A number for the port the API will listen on")
            .with_required(true)
            .build(),
        VariableSpec::builder()
            .key("PAYMENT_SERVICE_KEY")
            .description("A key from PaymentService used to authenticate requests")
            .with_required(true)
            .with_secret(true)
            .build(),
        VariableSpec::builder()
            .key("LOG_LEVEL")
            .description("Specify log level as 'info', 'warn', or 'error'")
            .build(),
    ])
    .unwrap();
    let env: EnvSnapshot = [("API_PORT", "3000"), ("PAYMENT_SERVICE_KEY", "sk_live_9f8e7d6c")]
        .into_iter()
        .collect();

    let report = Report::new(&schema, &resolve(&schema, &env));

    insta::assert_json_snapshot!(report.rows(), @r#"
    [
      {
        "Variable": "API_PORT",
        "Value": "3000",
        "Description": "A number for the port the API will listen on"
      },
      {
        "Variable": "PAYMENT_SERVICE_KEY",
        "Value": "****7d6c",
        "Description": "A key from PaymentService used to authenticate requests"
      },
      {
        "Variable": "LOG_LEVEL",
        "Value": "Missing from environment",
        "Description": "Specify log level as 'info', 'warn', or 'error'"
      }
    ]
    "#);
}

#[test]
fn test_render_single_row_table() {
    let schema = Schema::new()
        .with(
            VariableSpec::builder()
                .key("PORT")
                .description("port")
                .with_required(true)
                .build(),
        )
        .unwrap();
    let env: EnvSnapshot = [("PORT", "8080")].into_iter().collect();

    let report = Report::new(&schema, &resolve(&schema, &env));

    assert_eq!(
        report.rows(),
        [ReportRow {
            variable: "PORT".to_string(),
            value: "8080".to_string(),
            description: "port".to_string(),
        }]
    );
    insta::assert_snapshot!(report.render(), @r"
    ┌──────────┬───────┬─────────────┐
    │ Variable │ Value │ Description │
    ├──────────┼───────┼─────────────┤
    │ PORT     │ 8080  │ port        │
    └──────────┴───────┴─────────────┘
    ");
}

#[test]
fn test_write_to_never_leaks_secret() {
    let schema = Schema::new().with(spec("TOKEN", true)).unwrap();
    let env: EnvSnapshot = [("TOKEN", "super-secret-token-9876")].into_iter().collect();

    let mut out = Vec::new();
    Report::new(&schema, &resolve(&schema, &env))
        .write_to(&mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("****9876"));
    assert!(!text.contains("super-secret"));
    assert!(text.ends_with('\n'));
}
