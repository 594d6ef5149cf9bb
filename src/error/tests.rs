// envread: Environment schema reader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvError, EnvResult, MissingVariableError, SchemaError};

#[test]
fn test_missing_variable_display_single() {
    let err = MissingVariableError::from_keys(["PORT"]).unwrap();
    insta::assert_snapshot!(err.to_string(), @"missing required environment variable: PORT");
    assert_eq!(err.first_key(), "PORT");
}

#[test]
fn test_missing_variable_display_many() {
    let err = MissingVariableError::from_keys(["API_PORT", "PAYMENT_SERVICE_KEY"]).unwrap();
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required environment variables: API_PORT, PAYMENT_SERVICE_KEY"
    );
    assert_eq!(err.keys().len(), 2);
}

#[test]
fn test_missing_variable_requires_keys() {
    assert!(MissingVariableError::from_keys(Vec::<String>::new()).is_none());
}

#[test]
fn test_schema_error_display() {
    let err = SchemaError::InvalidKey {
        key: "A=B".to_string(),
        reason: "contains '='",
    };
    insta::assert_snapshot!(err.to_string(), @"invalid variable name 'A=B': contains '='");
}

#[test]
fn test_env_error_from_boxing() {
    let err: EnvError = SchemaError::DuplicateKey("PORT".to_string()).into();
    insta::assert_snapshot!(err.to_string(), @"schema error: variable 'PORT' is declared more than once");

    let err: EnvError = MissingVariableError::from_keys(["PORT"]).unwrap().into();
    assert!(matches!(err, EnvError::Missing(_)));
    assert_eq!(err.to_string(), "missing required environment variable: PORT");
}

#[test]
fn test_env_error_size() {
    // Both variants are boxed: pointer + discriminant
    let size = std::mem::size_of::<EnvError>();
    assert!(size <= 16, "EnvError is {size} bytes, expected <= 16");
}

#[test]
fn test_env_result_size() {
    let size = std::mem::size_of::<EnvResult<()>>();
    assert!(size <= 16, "EnvResult<()> is {size} bytes, expected <= 16");
}
